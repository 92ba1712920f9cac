//! Noyau exact Q-pur : fractions rationnelles canoniques
//!
//! Organisation interne :
//! - erreur.rs           : les quatre erreurs du noyau
//! - arithmetique.rs     : pgcd, exponentiation modulaire, factorisation, période décimale
//! - canon.rs            : réduction canonique (u128 -> u64, dépassement contrôlé)
//! - fraction.rs         : valeur Fraction + arithmétique + comparaisons
//! - jetons.rs           : tokenisation des littéraux
//! - analyse.rs          : toutes les formes d’entrée (nombres, paires, chaînes…)
//! - arrondi.rs          : ceil / floor / round / round_to
//! - puissance.rs        : puissance rationnelle exacte
//! - fraction_continue.rs: fraction continue + simplify
//! - format.rs           : "n/d", nombre mixte, LaTeX
//! - lecture.rs          : développement décimal avec période
//! - eval.rs             : pipeline de la calculatrice

pub mod analyse;
pub mod arithmetique;
pub mod arrondi;
pub mod canon;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod fraction;
pub mod fraction_continue;
pub mod jetons;
pub mod lecture;
pub mod puissance;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod proptests;

// API publique minimale
pub use analyse::Operande;
pub use erreur::{ErreurFraction, Result};
pub use eval::{eval_operation, Operation, Rendu, OPERATIONS};
pub use fraction::{Fraction, Signe};
