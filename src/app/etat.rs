//! src/app/etat.rs
//!
//! État UI (sans vue, sans évaluation).
//!
//! Rôle : contenir l’état de la calculatrice (deux opérandes, opération, rendus,
//! erreur, chiffres) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (le noyau n’est utilisé que pour ses types).
//! - Actions déterministes, sans effet de bord caché.
//! - Bornes sur la lecture décimale (chiffres).

use fraction_qpur::noyau::{Operation, Rendu};

/// Décimales par défaut (développement non périodique).
const DIGITS_DEFAUT: usize = 15;

/// Garde-fou : on borne la précision.
const DIGITS_MAX: usize = 200;

/// Champ qui reçoit les touches du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Champ {
    A,
    B,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrées utilisateur ---
    pub a: String,
    pub b: String,
    pub operation: Operation,
    pub champ: Champ,

    // --- sorties ---
    pub rendu: Option<Rendu>,
    pub sans_resultat: bool, // vrai si la puissance n’a pas de valeur rationnelle exacte
    pub erreur: String,

    // --- paramètres ---
    pub digits: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au champ actif après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            a: String::new(),
            b: String::new(),
            operation: Operation::Addition,
            champ: Champ::A,
            rendu: None,
            sans_resultat: false,
            erreur: String::new(),
            digits: DIGITS_DEFAUT,
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Champ actif (mutable).
    pub fn entree_active(&mut self) -> &mut String {
        match self.champ {
            Champ::A => &mut self.a,
            Champ::B => &mut self.b,
        }
    }

    /// AC : remise à zéro totale (entrées + résultats + chiffres par défaut).
    pub fn reset_total(&mut self) {
        self.a.clear();
        self.b.clear();
        self.champ = Champ::A;
        self.operation = Operation::Addition;
        self.clear_resultats();
        self.digits = DIGITS_DEFAUT;
    }

    /// C : effacer seulement le champ actif.
    pub fn clear_entree(&mut self) {
        self.entree_active().clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur (sans toucher aux entrées).
    pub fn clear_resultats(&mut self) {
        self.rendu = None;
        self.sans_resultat = false;
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// On CONSERVE le dernier rendu pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.sans_resultat = false;
        self.focus_entree = true;
    }

    /// `None` : pas de résultat rationnel exact.
    pub fn set_rendu(&mut self, rendu: Option<Rendu>) {
        self.erreur.clear();
        self.sans_resultat = rendu.is_none();
        self.rendu = rendu;
        self.focus_entree = true;
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.digits = digits.min(DIGITS_MAX);
        self.focus_entree = true;
    }
}
