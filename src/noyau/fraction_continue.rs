// src/noyau/fraction_continue.rs
//
// Fraction continue (Euclide) + simplification par réduites.

use super::canon::reduit;
use super::fraction::Fraction;

/// Tolérance par défaut de `simplify`.
pub const EPSILON_DEFAUT: f64 = 0.001;

impl Fraction {
    /// Termes [a0; a1, a2, ...] de n/d (magnitude). Vide pour NaN.
    pub fn to_continued(&self) -> Vec<u64> {
        let Some((_, mut a, mut b)) = self.canon() else {
            return Vec::new();
        };

        let mut termes = Vec::new();
        while b != 0 {
            termes.push(a / b);
            (a, b) = (b, a % b);
        }
        termes
    }

    /// Rationnel le plus simple (moins de termes) à moins de `eps` de |x|,
    /// signe réappliqué ; la valeur elle-même si aucune réduite plus courte ne convient.
    pub fn simplify(&self, eps: f64) -> Fraction {
        let Some((s, _, _)) = self.canon() else {
            return *self;
        };

        let abs = self.abs();
        let termes = abs.to_continued();

        // réduites h/k : h(i) = a(i)·h(i-1) + h(i-2)
        let (mut h1, mut h2) = (1u128, 0u128);
        let (mut k1, mut k2) = (0u128, 1u128);

        for &a in termes.iter().take(termes.len().saturating_sub(1)) {
            let h = a as u128 * h1 + h2;
            let k = a as u128 * k1 + k2;
            (h2, h1) = (h1, h);
            (k2, k1) = (k1, k);

            let Ok(reduite) = reduit(s, h, k) else {
                break;
            };
            if ecart(&reduite.abs(), &abs) < eps {
                return reduite;
            }
        }

        *self
    }

    pub fn simplify_defaut(&self) -> Fraction {
        self.simplify(EPSILON_DEFAUT)
    }
}

/// |a − b| en flottant ; différence exacte si elle tient en largeur fixe.
fn ecart(a: &Fraction, b: &Fraction) -> f64 {
    match a.sub(b) {
        Ok(diff) => diff.value_of().abs(),
        Err(_) => (a.value_of() - b.value_of()).abs(),
    }
}
