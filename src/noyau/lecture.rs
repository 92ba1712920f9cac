// src/noyau/lecture.rs
//
// Lecture décimale exacte : division longue, période entre parenthèses.
//   1/3 -> "0.(3)"   1/6 -> "0.1(6)"   1/7 -> "0.(142857)"   1/2 -> "0.5"
// Période non détectée (trop longue) : on tronque à `chiffres` décimales, sans parenthèses.

use std::fmt;

use super::arithmetique::{cycle_len, cycle_start};
use super::fraction::Fraction;

/// Nombre de décimales par défaut (hors période).
pub const CHIFFRES_DEFAUT: usize = 15;

/// Division longue : un chiffre à la fois, reste conservé.
struct DivisionLongue {
    reste: u128,
    d: u128,
}

impl DivisionLongue {
    fn chiffre(&mut self, out: &mut String) {
        let c = (self.reste / self.d) as u8;
        out.push(char::from(b'0' + c));
        self.reste = (self.reste % self.d) * 10;
    }
}

impl Fraction {
    /// Développement décimal ; `chiffres` borne les décimales d’un développement non périodique.
    pub fn to_decimal(&self, chiffres: usize) -> String {
        let Some((s, n, d)) = self.canon() else {
            return "NaN".to_string();
        };

        let len = cycle_len(d);
        let decalage = cycle_start(d, len);

        let mut out = String::new();
        if s.est_negatif() {
            out.push('-');
        }
        out.push_str(&(n / d).to_string());

        let mut div = DivisionLongue {
            reste: (n % d) as u128 * 10,
            d: d as u128,
        };

        if div.reste == 0 || (len == 0 && chiffres == 0) {
            return out;
        }
        out.push('.');

        if len > 0 {
            for _ in 0..decalage {
                div.chiffre(&mut out);
            }
            out.push('(');
            for _ in 0..len {
                div.chiffre(&mut out);
            }
            out.push(')');
        } else {
            for _ in 0..chiffres {
                if div.reste == 0 {
                    break;
                }
                div.chiffre(&mut out);
            }
        }

        out
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal(CHIFFRES_DEFAUT))
    }
}
