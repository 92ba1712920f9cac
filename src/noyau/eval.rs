//! Noyau : évaluation d’une opération (pipeline de la calculatrice)
//!
//! jetons(a), jetons(b) -> lecture -> opération -> rendus (fraction, mixte, LaTeX,
//! décimal, approximation, fraction continue, simplification) + comparaison a/b.

use std::cmp::Ordering;

use tracing::debug;

use super::erreur::Result;
use super::fraction::Fraction;
use super::fraction_continue::EPSILON_DEFAUT;
use super::jetons::{format_tokens, tokenize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Soustraction,
    Produit,
    Quotient,
    Modulo,
    Puissance,
    Pgcd,
    Ppcm,
    ArrondiPas,
}

/// Ordre d’affichage dans le sélecteur.
pub const OPERATIONS: [Operation; 9] = [
    Operation::Addition,
    Operation::Soustraction,
    Operation::Produit,
    Operation::Quotient,
    Operation::Modulo,
    Operation::Puissance,
    Operation::Pgcd,
    Operation::Ppcm,
    Operation::ArrondiPas,
];

impl Operation {
    pub fn symbole(self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Soustraction => "−",
            Operation::Produit => "×",
            Operation::Quotient => "÷",
            Operation::Modulo => "mod",
            Operation::Puissance => "^",
            Operation::Pgcd => "pgcd",
            Operation::Ppcm => "ppcm",
            Operation::ArrondiPas => "arrondi au pas",
        }
    }

    fn applique(self, a: &Fraction, b: &Fraction) -> Result<Option<Fraction>> {
        let r = match self {
            Operation::Addition => a.add(b)?,
            Operation::Soustraction => a.sub(b)?,
            Operation::Produit => a.mul(b)?,
            Operation::Quotient => a.div(b)?,
            Operation::Modulo => a.modulo(b)?,
            Operation::Puissance => return a.pow(b),
            Operation::Pgcd => a.gcd(b)?,
            Operation::Ppcm => a.lcm(b)?,
            Operation::ArrondiPas => a.round_to(b)?,
        };
        Ok(Some(r))
    }
}

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Rendu {
    pub jetons: String,
    pub fraction: String,
    pub mixte: String,
    pub latex: String,
    pub decimal: String,
    pub approx: String,
    pub termes: String,
    pub simplifie: String,
    /// `None` quand b est absent (reste entier).
    pub comparaison: Option<String>,
    pub divisible: Option<bool>,
}

/// Évalue `a op b`.
/// - `Ok(None)` : pas de résultat rationnel exact (puissance irrationnelle)
/// - `b` vide avec `Modulo` : reste entier signé s·n mod d
pub fn eval_operation(a: &str, op: Operation, b: &str, chiffres: usize) -> Result<Option<Rendu>> {
    let (a, b) = (a.trim(), b.trim());

    let jetons = format!(
        "a : {}\nb : {}",
        format_tokens(&tokenize(a)),
        format_tokens(&tokenize(b))
    );

    let fa = Fraction::depuis(a)?;
    let (fb, resultat) = if b.is_empty() && op == Operation::Modulo {
        (None, Some(fa.modulo_entier()))
    } else {
        let fb = Fraction::depuis(b)?;
        (Some(fb), op.applique(&fa, &fb)?)
    };

    let Some(r) = resultat else {
        debug!(a, b, op = op.symbole(), "aucun résultat rationnel");
        return Ok(None);
    };

    let termes = r
        .to_continued()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Some(Rendu {
        jetons,
        fraction: r.to_fraction(false),
        mixte: r.to_fraction(true),
        latex: r.to_latex(true),
        decimal: r.to_decimal(chiffres),
        approx: format!("{}", r.value_of()),
        termes: format!("[{termes}]"),
        simplifie: r.simplify(EPSILON_DEFAUT).to_fraction(false),
        comparaison: fb.map(|fb| comparaison(&fa, &fb)).transpose()?,
        divisible: fb.map(|fb| fa.divisible(fb)).transpose()?,
    }))
}

fn comparaison(a: &Fraction, b: &Fraction) -> Result<String> {
    let signe = match a.compare(b)? {
        Some(Ordering::Less) => "<",
        Some(Ordering::Equal) => "=",
        Some(Ordering::Greater) => ">",
        None => "?",
    };
    Ok(format!("{} {signe} {}", a.to_fraction(false), b.to_fraction(false)))
}
