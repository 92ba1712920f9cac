// src/noyau/canon.rs
//
// Normalisation (forme canonique) :
// - signe porté à part (−1 / +1), zéro toujours positif
// - numérateur / dénominateur réduits par pgcd
// - dénominateur > 0, sinon DivisionByZero
// - rétrécissement u128 -> u64 vérifié (Overflow si la forme réduite ne tient pas)
//
// Toutes les opérations arithmétiques repassent par ici.

use tracing::debug;

use super::arithmetique::pgcd;
use super::erreur::{ErreurFraction, Result};
use super::fraction::{Fraction, Signe};

/// Réduit (signe, n, d) en fraction canonique.
pub fn reduit(signe: Signe, n: u128, d: u128) -> Result<Fraction> {
    if d == 0 {
        return Err(ErreurFraction::DivisionByZero);
    }

    let g = pgcd(n, d);
    let n = u64::try_from(n / g).map_err(|_| depassement("numérateur"))?;
    let d = u64::try_from(d / g).map_err(|_| depassement("dénominateur"))?;

    let signe = if n == 0 { Signe::Positif } else { signe };
    Ok(Fraction::canonique(signe, n, d))
}

/// Variante signée : le signe vient du produit des signes de `num` et `den`.
pub fn reduit_signe(num: i128, den: i128) -> Result<Fraction> {
    let signe = Signe::de(num) * Signe::de(den);
    reduit(signe, num.unsigned_abs(), den.unsigned_abs())
}

/// a·b exact (u128), Overflow sinon.
pub fn produit(a: u128, b: u128) -> Result<u128> {
    a.checked_mul(b).ok_or_else(|| depassement("produit"))
}

/// a + b exact (u128), Overflow sinon.
pub fn somme(a: u128, b: u128) -> Result<u128> {
    a.checked_add(b).ok_or_else(|| depassement("somme"))
}

/// sa·a + sb·b sur magnitudes non signées : renvoie (signe, |résultat|).
pub fn somme_signee(sa: Signe, a: u128, sb: Signe, b: u128) -> Result<(Signe, u128)> {
    if sa == sb {
        return Ok((sa, somme(a, b)?));
    }
    if a >= b {
        Ok((sa, a - b))
    } else {
        Ok((sb, b - a))
    }
}

pub fn depassement(quoi: &str) -> ErreurFraction {
    debug!(quoi, "dépassement de la largeur fixe");
    ErreurFraction::Overflow
}
