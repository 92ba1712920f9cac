// src/noyau/fraction.rs
//
// Valeur fraction (immuable, Copy) + cœur arithmétique.
//
// Représentation canonique : (signe, n, d) avec
// - d > 0, pgcd(n, d) = 1 (0 s’écrit 0/1, signe +)
// - ou la sentinelle NaN, qui se propage comme le NaN flottant.
//
// Chaque opération binaire accepte toute forme lisible par `analyse`
// (`a.add(b)` ≡ `a.add((3, 4))` ≡ `a.add("3/4")`) et repasse par `canon::reduit`.
// Les produits croisés se font sur des magnitudes u128 : pas de perte silencieuse,
// Overflow seulement si la forme réduite dépasse u64.

use std::cmp::Ordering;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use num_rational::Ratio;

use super::analyse::{lire, Operande};
use super::arithmetique::pgcd;
use super::canon::{produit, reduit, somme_signee};
use super::erreur::{ErreurFraction, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signe {
    Negatif,
    Positif,
}

impl Signe {
    /// Signe d’un entier (0 compte comme positif).
    pub fn de(x: i128) -> Self {
        if x < 0 {
            Signe::Negatif
        } else {
            Signe::Positif
        }
    }

    pub fn est_negatif(self) -> bool {
        self == Signe::Negatif
    }

    /// −1 ou +1.
    pub fn facteur(self) -> i8 {
        match self {
            Signe::Negatif => -1,
            Signe::Positif => 1,
        }
    }
}

impl Neg for Signe {
    type Output = Signe;

    fn neg(self) -> Signe {
        match self {
            Signe::Negatif => Signe::Positif,
            Signe::Positif => Signe::Negatif,
        }
    }
}

impl Mul for Signe {
    type Output = Signe;

    fn mul(self, autre: Signe) -> Signe {
        if self == autre {
            Signe::Positif
        } else {
            Signe::Negatif
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Repr {
    Canon { signe: Signe, n: u64, d: u64 },
    NaN,
}

/// Fraction exacte à largeur fixe, toujours réduite.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    repr: Repr,
}

impl Fraction {
    /* ------------------------ Construction ------------------------ */

    /// Chemin rapide : composantes déjà réduites (appelé par `canon::reduit`).
    pub(crate) fn canonique(signe: Signe, n: u64, d: u64) -> Self {
        debug_assert!(d > 0 && pgcd(n, d) == 1);
        Self {
            repr: Repr::Canon { signe, n, d },
        }
    }

    /// Construit depuis n’importe quelle forme d’entrée acceptée.
    pub fn depuis<'a>(entree: impl Into<Operande<'a>>) -> Result<Self> {
        lire(entree.into())
    }

    /// n/d entiers.
    pub fn new(n: i64, d: i64) -> Result<Self> {
        Self::depuis((n, d))
    }

    pub fn zero() -> Self {
        Self::canonique(Signe::Positif, 0, 1)
    }

    pub fn un() -> Self {
        Self::canonique(Signe::Positif, 1, 1)
    }

    /// Sentinelle NaN (entrée flottante NaN / ±∞).
    pub fn nan() -> Self {
        Self { repr: Repr::NaN }
    }

    /* ------------------------ Inspection ------------------------ */

    pub(crate) fn canon(&self) -> Option<(Signe, u64, u64)> {
        match self.repr {
            Repr::Canon { signe, n, d } => Some((signe, n, d)),
            Repr::NaN => None,
        }
    }

    pub fn signe(&self) -> Option<Signe> {
        self.canon().map(|(s, _, _)| s)
    }

    pub fn numer(&self) -> Option<u64> {
        self.canon().map(|(_, n, _)| n)
    }

    pub fn denom(&self) -> Option<u64> {
        self.canon().map(|(_, _, d)| d)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    pub fn is_zero(&self) -> bool {
        self.numer() == Some(0)
    }

    /// Approximation flottante (affichage / interop seulement).
    pub fn value_of(&self) -> f64 {
        match self.canon() {
            Some((s, n, d)) => f64::from(s.facteur()) * n as f64 / d as f64,
            None => f64::NAN,
        }
    }

    /* ------------------------ Arithmétique ------------------------ */

    /// Lit l’opérande puis applique `f` si aucun des deux n’est NaN.
    fn binaire<'a, F>(&self, autre: impl Into<Operande<'a>>, f: F) -> Result<Fraction>
    where
        F: FnOnce((Signe, u64, u64), (Signe, u64, u64)) -> Result<Fraction>,
    {
        let p = Fraction::depuis(autre)?;
        match (self.canon(), p.canon()) {
            (Some(a), Some(b)) => f(a, b),
            _ => Ok(Fraction::nan()),
        }
    }

    pub fn add<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(s, n, d), (ps, pn, pd)| {
            let (signe, num) = somme_signee(
                s,
                produit(n as u128, pd as u128)?,
                ps,
                produit(pn as u128, d as u128)?,
            )?;
            reduit(signe, num, produit(d as u128, pd as u128)?)
        })
    }

    pub fn sub<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(s, n, d), (ps, pn, pd)| {
            let (signe, num) = somme_signee(
                s,
                produit(n as u128, pd as u128)?,
                -ps,
                produit(pn as u128, d as u128)?,
            )?;
            reduit(signe, num, produit(d as u128, pd as u128)?)
        })
    }

    pub fn mul<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(s, n, d), (ps, pn, pd)| {
            reduit(
                s * ps,
                produit(n as u128, pn as u128)?,
                produit(d as u128, pd as u128)?,
            )
        })
    }

    /// Division : un diviseur nul donne DivisionByZero (dénominateur d·0).
    pub fn div<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(s, n, d), (ps, pn, pd)| {
            reduit(
                s * ps,
                produit(n as u128, pd as u128)?,
                produit(d as u128, pn as u128)?,
            )
        })
    }

    /// Reste entier de (s·n) ÷ d, signe du dividende (troncature vers 0).
    pub fn modulo_entier(&self) -> Fraction {
        match self.canon() {
            Some((s, n, d)) => {
                let reste = n % d;
                let signe = if reste == 0 { Signe::Positif } else { s };
                Fraction::canonique(signe, reste, 1)
            }
            None => Fraction::nan(),
        }
    }

    /// Modulo rationnel : s·(Pd·n) mod (Pn·d) sur Pd·d.
    /// Le signe de l’opérande est ignoré ; un opérande nul donne DivisionByZero.
    pub fn modulo<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(s, n, d), (_, pn, pd)| {
            let diviseur = produit(pn as u128, d as u128)?;
            if diviseur == 0 {
                return Err(ErreurFraction::DivisionByZero);
            }
            let reste = produit(pd as u128, n as u128)? % diviseur;
            reduit(s, reste, produit(pd as u128, d as u128)?)
        })
    }

    /// pgcd rationnel : pgcd(n, Pn)·pgcd(d, Pd) / (d·Pd), toujours positif.
    pub fn gcd<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(_, n, d), (_, pn, pd)| {
            reduit(
                Signe::Positif,
                produit(pgcd(pn, n) as u128, pgcd(pd, d) as u128)?,
                produit(pd as u128, d as u128)?,
            )
        })
    }

    /// ppcm rationnel : n·Pn / (pgcd(n, Pn)·pgcd(d, Pd)) ; 0 si les deux sont nuls.
    pub fn lcm<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Fraction> {
        self.binaire(autre, |(_, n, d), (_, pn, pd)| {
            if n == 0 && pn == 0 {
                return Ok(Fraction::zero());
            }
            reduit(
                Signe::Positif,
                produit(pn as u128, n as u128)?,
                produit(pgcd(pn, n) as u128, pgcd(pd, d) as u128)?,
            )
        })
    }

    pub fn abs(&self) -> Fraction {
        match self.canon() {
            Some((_, n, d)) => Fraction::canonique(Signe::Positif, n, d),
            None => Fraction::nan(),
        }
    }

    pub fn neg(&self) -> Fraction {
        match self.canon() {
            Some((_, 0, d)) => Fraction::canonique(Signe::Positif, 0, d),
            Some((s, n, d)) => Fraction::canonique(-s, n, d),
            None => Fraction::nan(),
        }
    }

    /// d/n, signe conservé ; 0 n’a pas d’inverse.
    pub fn inverse(&self) -> Result<Fraction> {
        match self.canon() {
            Some((_, 0, _)) => Err(ErreurFraction::DivisionByZero),
            Some((s, n, d)) => Ok(Fraction::canonique(s, d, n)),
            None => Ok(Fraction::nan()),
        }
    }

    /* ------------------------ Comparaisons ------------------------ */

    /// Égalité exacte ; faux dès qu’un NaN est en jeu.
    pub fn equals<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<bool> {
        let p = Fraction::depuis(autre)?;
        // formes canoniques : s·n·Pd = Ps·Pn·d ⇔ composantes identiques
        Ok(match (self.canon(), p.canon()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
    }

    /// Signe de s·n·Pd − Ps·Pn·d ; `None` si un NaN est en jeu.
    pub fn compare<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<Option<Ordering>> {
        let p = Fraction::depuis(autre)?;
        Ok(compare_canon(self.canon(), p.canon()))
    }

    /// Vrai si l’opérande est non nul et divise exactement cette valeur.
    pub fn divisible<'a>(&self, autre: impl Into<Operande<'a>>) -> Result<bool> {
        let p = Fraction::depuis(autre)?;
        let (Some((_, n, d)), Some((_, pn, pd))) = (self.canon(), p.canon()) else {
            return Ok(false);
        };

        // magnitudes u64·u64 : tiennent toujours en u128
        let diviseur = pn as u128 * d as u128;
        Ok(diviseur != 0 && (n as u128 * pd as u128) % diviseur == 0)
    }
}

fn compare_canon(a: Option<(Signe, u64, u64)>, b: Option<(Signe, u64, u64)>) -> Option<Ordering> {
    let ((s, n, d), (ps, pn, pd)) = (a?, b?);

    if s != ps {
        // zéro est toujours positif : des signes différents suffisent
        return Some(if s.est_negatif() {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }

    let gauche = n as u128 * pd as u128;
    let droite = pn as u128 * d as u128;
    let ord = gauche.cmp(&droite);
    Some(if s.est_negatif() { ord.reverse() } else { ord })
}

/* ------------------------ Traits std ------------------------ */

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, autre: &Self) -> bool {
        match (self.canon(), autre.canon()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, autre: &Self) -> Option<Ordering> {
        compare_canon(self.canon(), autre.canon())
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::neg(&self)
    }
}

impl FromStr for Fraction {
    type Err = ErreurFraction;

    fn from_str(s: &str) -> Result<Self> {
        Fraction::depuis(s)
    }
}

impl From<i64> for Fraction {
    fn from(v: i64) -> Self {
        Fraction::canonique(Signe::de(v.into()), v.unsigned_abs(), 1)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = ErreurFraction;

    fn try_from(v: f64) -> Result<Self> {
        Fraction::depuis(v)
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.value_of()
    }
}

impl TryFrom<Fraction> for Ratio<i64> {
    type Error = ErreurFraction;

    fn try_from(f: Fraction) -> Result<Self> {
        let (s, n, d) = f.canon().ok_or(ErreurFraction::InvalidParameter)?;
        let n = i64::try_from(n).map_err(|_| ErreurFraction::Overflow)?;
        let d = i64::try_from(d).map_err(|_| ErreurFraction::Overflow)?;
        let n = if s.est_negatif() { -n } else { n };
        // déjà réduite : pas de seconde réduction
        Ok(Ratio::new_raw(n, d))
    }
}
