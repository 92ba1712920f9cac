// src/noyau/analyse.rs
//
// Lecture de toutes les formes d’entrée -> fraction canonique.
//
// Formes (une variante explicite par forme, résolue à l’appel) :
// - rien                      -> 0
// - entier                    -> n/1
// - flottant                  -> meilleure approximation (Farey / Stern-Brocot), NaN/±∞ -> NaN
// - paire (n, d) numérique    -> NonIntegerParameter si partie fractionnaire
// - enregistrement {n, d, s?} -> n·s / d
// - tableau [n, d?]           -> d = 1 par défaut
// - chaîne                    -> grammaire ci-dessous
//
// Grammaire chaîne (jetons = suites de chiffres ou caractères isolés) :
//   [+|-] 123
//   [+|-] 123/456  |  123:456
//   [+|-] 123 1/2
//   [+|-] 123.456  |  .5  |  123.
//   [+|-] 123.'456' | 123.(456) | 123.45'6' | 123.45(6)

use num_rational::Ratio;
use tracing::debug;

use super::canon::{depassement, produit, reduit, reduit_signe, somme};
use super::erreur::{ErreurFraction, Result};
use super::fraction::{Fraction, Signe};
use super::jetons::{tokenize, Jeton};

/// Borne des numérateurs / dénominateurs explorés par la recherche de Farey.
pub const BORNE_FAREY: u64 = 10_000_000;

/// Entrée du constructeur (et de chaque opération binaire).
#[derive(Clone, Copy, Debug)]
pub enum Operande<'a> {
    Zero,
    Entier(i64),
    Flottant(f64),
    /// Deux nombres qui doivent être entiers.
    Paire(f64, f64),
    /// {n, d} avec multiplicateur de signe optionnel s.
    Enregistrement { n: i64, d: i64, s: Option<i64> },
    /// [numérateur, dénominateur?]
    Tableau(&'a [i64]),
    Texte(&'a str),
    Fraction(Fraction),
    Ratio(Ratio<i64>),
}

impl From<i64> for Operande<'_> {
    fn from(v: i64) -> Self {
        Operande::Entier(v)
    }
}

impl From<i32> for Operande<'_> {
    fn from(v: i32) -> Self {
        Operande::Entier(v.into())
    }
}

impl From<u32> for Operande<'_> {
    fn from(v: u32) -> Self {
        Operande::Entier(v.into())
    }
}

impl From<f64> for Operande<'_> {
    fn from(v: f64) -> Self {
        Operande::Flottant(v)
    }
}

impl From<(i64, i64)> for Operande<'_> {
    fn from((n, d): (i64, i64)) -> Self {
        Operande::Enregistrement { n, d, s: None }
    }
}

impl<'a> From<&'a [i64]> for Operande<'a> {
    fn from(v: &'a [i64]) -> Self {
        Operande::Tableau(v)
    }
}

impl<'a> From<&'a str> for Operande<'a> {
    fn from(v: &'a str) -> Self {
        Operande::Texte(v)
    }
}

impl<'a> From<&'a String> for Operande<'a> {
    fn from(v: &'a String) -> Self {
        Operande::Texte(v.as_str())
    }
}

impl From<Fraction> for Operande<'_> {
    fn from(v: Fraction) -> Self {
        Operande::Fraction(v)
    }
}

impl From<&Fraction> for Operande<'_> {
    fn from(v: &Fraction) -> Self {
        Operande::Fraction(*v)
    }
}

impl From<Ratio<i64>> for Operande<'_> {
    fn from(v: Ratio<i64>) -> Self {
        Operande::Ratio(v)
    }
}

/// Point d’entrée unique : forme -> fraction canonique.
pub fn lire(entree: Operande<'_>) -> Result<Fraction> {
    match entree {
        Operande::Zero => Ok(Fraction::zero()),
        Operande::Fraction(f) => Ok(f),
        Operande::Entier(v) => Ok(Fraction::from(v)),
        Operande::Flottant(x) => lire_flottant(x),
        Operande::Paire(n, d) => lire_paire(n, d),
        Operande::Enregistrement { n, d, s } => {
            let n = i128::from(n) * i128::from(s.unwrap_or(1));
            reduit_signe(n, d.into())
        }
        Operande::Tableau(v) => match *v {
            [n] => Ok(Fraction::from(n)),
            [n, d] => reduit_signe(n.into(), d.into()),
            _ => Err(ErreurFraction::InvalidParameter),
        },
        Operande::Ratio(r) => reduit_signe((*r.numer()).into(), (*r.denom()).into()),
        Operande::Texte(s) => lire_texte(s).inspect_err(|e| {
            debug!(entree = s, erreur = %e, "littéral fraction rejeté");
        }),
    }
}

/* ------------------------ Nombres ------------------------ */

/// |x| entier (déjà vérifié) -> u128.
fn magnitude(x: f64) -> Result<u128> {
    let x = x.abs();
    if x >= u128::MAX as f64 {
        return Err(depassement("flottant entier"));
    }
    Ok(x as u128)
}

fn lire_paire(n: f64, d: f64) -> Result<Fraction> {
    let entier = |x: f64| x.is_finite() && x.fract() == 0.0;
    if !entier(n) || !entier(d) {
        return Err(ErreurFraction::NonIntegerParameter);
    }

    let signe_de = |x: f64| if x < 0.0 { Signe::Negatif } else { Signe::Positif };
    reduit(signe_de(n) * signe_de(d), magnitude(n)?, magnitude(d)?)
}

/// Meilleure approximation rationnelle d’un flottant.
///
/// On ramène x dans [0, 1) par une puissance de dix z, puis on encadre x entre
/// A/B et C/D (départ 0/1 et 1/1) en remplaçant la borne du mauvais côté par la
/// médiante, jusqu’à égalité exacte avec la médiante ou dépassement de `BORNE_FAREY`.
/// Le résultat (n·z)/d reproduit la valeur décimale du flottant.
fn lire_flottant(x: f64) -> Result<Fraction> {
    if !x.is_finite() {
        return Ok(Fraction::nan());
    }

    let signe = if x < 0.0 { Signe::Negatif } else { Signe::Positif };
    let mut x = x.abs();

    if x.fract() == 0.0 {
        return reduit(signe, magnitude(x)?, 1);
    }

    // flottant non entier => |x| < 2^53, z ≤ 10^16
    let mut z: u128 = 1;
    if x >= 1.0 {
        let e = (1.0 + x.ln() / std::f64::consts::LN_10).floor() as u32;
        z = 10u128.pow(e);
        x /= z as f64;
    }

    let (mut a, mut b, mut c, mut d) = (0u64, 1u64, 1u64, 1u64);
    let (mut n, mut den) = (0u64, 1u64);

    while b <= BORNE_FAREY && d <= BORNE_FAREY {
        let m = (a + c) as f64 / (b + d) as f64;

        if x == m {
            if b + d <= BORNE_FAREY {
                (n, den) = (a + c, b + d);
            } else if d > b {
                (n, den) = (c, d);
            } else {
                (n, den) = (a, b);
            }
            break;
        }

        if x > m {
            a += c;
            b += d;
        } else {
            c += a;
            d += b;
        }

        (n, den) = if b > BORNE_FAREY { (c, d) } else { (a, b) };
    }

    reduit(signe, produit(n as u128, z)?, den as u128)
}

/* ------------------------ Chaînes ------------------------ */

/// Curseur sur la liste de jetons ; hors bornes = aucun jeton.
struct Curseur<'a> {
    jetons: Vec<Jeton<'a>>,
}

impl Curseur<'_> {
    fn est(&self, i: usize, c: char) -> bool {
        self.jetons.get(i).is_some_and(|j| j.est(c))
    }

    /// Valeur d’une suite de chiffres (InvalidParameter si autre chose).
    fn entier(&self, i: usize) -> Result<u128> {
        match self.jetons.get(i) {
            Some(Jeton::Chiffres(s)) => s.parse::<u128>().map_err(|_| depassement("littéral")),
            _ => Err(ErreurFraction::InvalidParameter),
        }
    }

    /// 10^(nombre de chiffres du jeton i).
    fn echelle(&self, i: usize) -> Result<u128> {
        match self.jetons.get(i) {
            Some(Jeton::Chiffres(s)) => {
                let k = u32::try_from(s.len()).map_err(|_| depassement("échelle"))?;
                10u128.checked_pow(k).ok_or_else(|| depassement("échelle"))
            }
            _ => Err(ErreurFraction::InvalidParameter),
        }
    }

    fn periode_en(&self, i: usize) -> bool {
        (self.est(i, '(') && self.est(i + 2, ')')) || (self.est(i, '\'') && self.est(i + 2, '\''))
    }
}

fn lire_texte(s: &str) -> Result<Fraction> {
    let c = Curseur {
        jetons: tokenize(s),
    };
    let len = c.jetons.len();

    let mut i = 0;
    let mut signe = Signe::Positif;
    if c.est(i, '-') {
        signe = Signe::Negatif;
        i += 1;
    } else if c.est(i, '+') {
        i += 1;
    }

    if i >= len {
        return Err(ErreurFraction::InvalidParameter);
    }

    // valeur = v + w/y + x/(y·z)  ->  (x + y·z·v + z·w) / (y·z)
    let (mut v, mut w, mut x) = (0u128, 0u128, 0u128);
    let (mut y, mut z) = (1u128, 1u128);

    if len == i + 1 {
        w = c.entier(i)?;
        i += 1;
    } else if c.est(i + 1, '.') || c.est(i, '.') {
        if !c.est(i, '.') {
            v = c.entier(i)?;
            i += 1;
        }
        i += 1;

        // chiffres après le point (suivis de rien, ou d’une période)
        if i + 1 == len || c.periode_en(i + 1) {
            w = c.entier(i)?;
            y = c.echelle(i)?;
            i += 1;
        }

        if c.periode_en(i) {
            x = c.entier(i + 1)?;
            z = c.echelle(i + 1)? - 1;
            i += 3;
        }
    } else if c.est(i + 1, '/') || c.est(i + 1, ':') {
        w = c.entier(i)?;
        y = c.entier(i + 2)?;
        i += 3;
    } else if c.est(i + 3, '/') && c.est(i + 1, ' ') {
        v = c.entier(i)?;
        w = c.entier(i + 2)?;
        y = c.entier(i + 4)?;
        i += 5;
    }

    // jetons restants : forme non reconnue
    if i < len {
        return Err(ErreurFraction::InvalidParameter);
    }

    let d = produit(y, z)?;
    let n = somme(somme(x, produit(d, v)?)?, produit(z, w)?)?;
    reduit(signe, n, d)
}
