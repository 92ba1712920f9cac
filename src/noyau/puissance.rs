// src/noyau/puissance.rs
//
// Puissance rationnelle exacte.
// - exposant entier : puissances entières exactes (checked_pow), jamais de flottant
// - exposant p/q    : base ≥ 0, n et d doivent être des puissances q-ièmes exactes,
//                     racines factorisées puis élevées à p ; sinon pas de résultat (None)

use num_integer::Roots;
use tracing::trace;

use super::analyse::Operande;
use super::arithmetique::factorise;
use super::canon::{depassement, produit, reduit};
use super::erreur::Result;
use super::fraction::{Fraction, Signe};

impl Fraction {
    /// `Ok(None)` : aucun rationnel exact (ex. 2^(1/2), ou base négative et exposant non entier).
    pub fn pow<'a>(&self, exposant: impl Into<Operande<'a>>) -> Result<Option<Fraction>> {
        let p = Fraction::depuis(exposant)?;
        let (Some((s, n, d)), Some((ps, pn, pd))) = (self.canon(), p.canon()) else {
            return Ok(Some(Fraction::nan()));
        };

        if pd == 1 {
            // exposant négatif : on élève l’inverse
            let (num, den) = if ps.est_negatif() { (d, n) } else { (n, d) };
            let signe = if s.est_negatif() && pn % 2 == 1 {
                Signe::Negatif
            } else {
                Signe::Positif
            };
            return reduit(signe, puissance_entiere(num, pn)?, puissance_entiere(den, pn)?).map(Some);
        }

        if s.est_negatif() {
            trace!(exposant = %p.to_fraction(false), "base négative, exposant non entier");
            return Ok(None);
        }

        let num = match racine_exacte(n, pn, pd)? {
            Some(v) => v,
            None => return Ok(None),
        };
        let den = match racine_exacte(d, pn, pd)? {
            Some(v) => v,
            None => return Ok(None),
        };

        let (num, den) = if ps.est_negatif() { (den, num) } else { (num, den) };
        reduit(Signe::Positif, num, den).map(Some)
    }
}

/// base^e exact en u128 (0^0 = 1).
fn puissance_entiere(base: u64, e: u64) -> Result<u128> {
    match base {
        0 => Ok(if e == 0 { 1 } else { 0 }),
        1 => Ok(1),
        _ => {
            let e = u32::try_from(e).map_err(|_| depassement("exposant"))?;
            (base as u128)
                .checked_pow(e)
                .ok_or_else(|| depassement("puissance"))
        }
    }
}

/// x^(p/q) si c’est un entier, `None` sinon.
///
/// x^(p/q) est entier ssi x est une puissance q-ième exacte : on extrait r = x^(1/q)
/// d’abord (r ≤ 2^32 dès que q ≥ 2), puis on factorise r, jamais x.
fn racine_exacte(x: u64, p: u64, q: u64) -> Result<Option<u128>> {
    if x == 0 {
        return Ok(Some(0));
    }

    let q = u32::try_from(q).unwrap_or(u32::MAX);
    let r = x.nth_root(q);
    if r.checked_pow(q) != Some(x) {
        trace!(x, q, "pas de racine rationnelle exacte");
        return Ok(None);
    }

    let mut resultat: u128 = 1;
    for (premier, exp) in factorise(r) {
        let e = u32::try_from(exp as u128 * p as u128).map_err(|_| depassement("exposant"))?;
        let facteur = (premier as u128)
            .checked_pow(e)
            .ok_or_else(|| depassement("puissance"))?;
        resultat = produit(resultat, facteur)?;
    }

    Ok(Some(resultat))
}
