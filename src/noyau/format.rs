// src/noyau/format.rs
//
// Affichage fraction : texte ("-7/2", "-3 1/2") et LaTeX ("-\frac{7}{2}", "-3\frac{1}{2}").

use super::fraction::Fraction;

/// Découpe commune : (préfixe signe + partie entière éventuelle, reste n/d ou None si entier).
fn decoupe(f: &Fraction, exclure_entier: bool, sep_entier: &str) -> Option<(String, Option<(u64, u64)>)> {
    let (s, mut n, d) = f.canon()?;

    let mut out = String::new();
    if s.est_negatif() {
        out.push('-');
    }

    if d == 1 {
        out.push_str(&n.to_string());
        return Some((out, None));
    }

    let entier = n / d;
    if exclure_entier && entier > 0 {
        out.push_str(&entier.to_string());
        out.push_str(sep_entier);
        n %= d;
    }

    Some((out, Some((n, d))))
}

impl Fraction {
    /// "n/d", "n" si entier ; `exclure_entier` sort la partie entière ("1 1/2").
    pub fn to_fraction(&self, exclure_entier: bool) -> String {
        match decoupe(self, exclure_entier, " ") {
            None => "NaN".to_string(),
            Some((tete, None)) => tete,
            Some((tete, Some((n, d)))) => format!("{tete}{n}/{d}"),
        }
    }

    /// Même structure, partie fractionnaire en \frac{n}{d}.
    pub fn to_latex(&self, exclure_entier: bool) -> String {
        match decoupe(self, exclure_entier, "") {
            None => "NaN".to_string(),
            Some((tete, None)) => tete,
            Some((tete, Some((n, d)))) => format!("{tete}\\frac{{{n}}}{{{d}}}"),
        }
    }
}
