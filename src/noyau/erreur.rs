// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau fraction.
// Levées au point de détection (lecture / normalisation), jamais rattrapées ici.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurFraction {
    /// Dénominateur canonique nul (construction ou opération).
    #[error("division par zéro")]
    DivisionByZero,

    /// Forme d’entrée illisible (chaîne hors grammaire, tableau vide, ...).
    #[error("argument invalide")]
    InvalidParameter,

    /// Construction à deux arguments avec partie fractionnaire.
    #[error("les paramètres doivent être entiers")]
    NonIntegerParameter,

    /// Résultat hors de la largeur fixe (u64 par composante).
    #[error("dépassement de capacité (entiers 64 bits)")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, ErreurFraction>;
