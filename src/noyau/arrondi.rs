// src/noyau/arrondi.rs
//
// Arrondis exacts à `places` décimales : on calcule l’entier arrondi de
// s·n·10^places / d, puis on le remet sur 10^places (réduit ensuite).
// `round` arrondit la demie vers +∞ (comme Math.round) : -2.5 -> -2, 2.5 -> 3.

use super::analyse::Operande;
use super::canon::{depassement, produit, reduit, somme};
use super::erreur::{ErreurFraction, Result};
use super::fraction::{Fraction, Signe};

#[derive(Clone, Copy, Debug)]
enum Mode {
    Plafond,
    Plancher,
    Proche,
}

impl Fraction {
    pub fn ceil(&self, places: u32) -> Result<Fraction> {
        self.arrondi(places, Mode::Plafond)
    }

    pub fn floor(&self, places: u32) -> Result<Fraction> {
        self.arrondi(places, Mode::Plancher)
    }

    pub fn round(&self, places: u32) -> Result<Fraction> {
        self.arrondi(places, Mode::Proche)
    }

    /// Multiple de `pas` le plus proche (magnitude arrondie, signe conservé).
    pub fn round_to<'a>(&self, pas: impl Into<Operande<'a>>) -> Result<Fraction> {
        let p = Fraction::depuis(pas)?;
        let (Some((s, n, d)), Some((_, pn, pd))) = (self.canon(), p.canon()) else {
            return Ok(Fraction::nan());
        };
        if pn == 0 {
            return Err(ErreurFraction::DivisionByZero);
        }

        // k = arrondi(n·Pd / (d·Pn)), résultat s·k·Pn / Pd
        let num = produit(n as u128, pd as u128)?;
        let den = produit(d as u128, pn as u128)?;
        let (_, k) = proche(Signe::Positif, num, den)?;
        reduit(s, produit(k, pn as u128)?, pd as u128)
    }

    fn arrondi(&self, places: u32, mode: Mode) -> Result<Fraction> {
        let Some((s, n, d)) = self.canon() else {
            return Ok(Fraction::nan());
        };

        let echelle = 10u128
            .checked_pow(places)
            .ok_or_else(|| depassement("échelle"))?;
        let v = produit(n as u128, echelle)?;
        let d = d as u128;

        let (signe, entier) = match mode {
            Mode::Plafond => plancher(-s, v, d),
            Mode::Plancher => plancher(s, v, d),
            Mode::Proche => proche(s, v, d)?,
        };
        let signe = match mode {
            Mode::Plafond => -signe,
            _ => signe,
        };

        reduit(signe, entier, echelle)
    }
}

/// ⌊s·v/d⌋ sous forme (signe, magnitude).
fn plancher(s: Signe, v: u128, d: u128) -> (Signe, u128) {
    let (q, r) = (v / d, v % d);
    match s {
        Signe::Positif => (Signe::Positif, q),
        Signe::Negatif => (Signe::Negatif, q + u128::from(r != 0)),
    }
}

/// ⌊s·v/d + 1/2⌋ = ⌊(2·s·v + d) / 2d⌋.
fn proche(s: Signe, v: u128, d: u128) -> Result<(Signe, u128)> {
    let v2 = produit(v, 2)?;
    let d2 = produit(d, 2)?;
    Ok(match s {
        Signe::Positif => plancher(Signe::Positif, somme(v2, d)?, d2),
        // -v/d + 1/2 = -(2v - d) / 2d, ou dans (0, 1/2] si 2v < d
        Signe::Negatif if v2 >= d => plancher(Signe::Negatif, v2 - d, d2),
        Signe::Negatif => (Signe::Positif, 0),
    })
}
