// src/noyau/jetons.rs

/// Jeton d’un littéral fraction : suite de chiffres ASCII, ou caractère isolé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jeton<'a> {
    Chiffres(&'a str),
    Symbole(char),
}

impl Jeton<'_> {
    pub fn est(&self, c: char) -> bool {
        matches!(self, Jeton::Symbole(s) if *s == c)
    }
}

/// Découpe une chaîne en jetons.
/// - "123.45(6)" -> [123, '.', 45, '(', 6, ')']
/// - "-1 1/2"    -> ['-', 1, ' ', 1, '/', 2]
/// Les espaces sont des jetons (le nombre mixte en dépend).
pub fn tokenize(s: &str) -> Vec<Jeton<'_>> {
    let mut out = Vec::new();
    let mut chars = s.char_indices().peekable();

    while let Some((debut, c)) = chars.next() {
        if !c.is_ascii_digit() {
            out.push(Jeton::Symbole(c));
            continue;
        }

        let mut fin = debut + 1;
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            fin = i + 1;
            chars.next();
        }
        out.push(Jeton::Chiffres(&s[debut..fin]));
    }

    out
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(jetons: &[Jeton<'_>]) -> String {
    jetons
        .iter()
        .map(|j| match j {
            Jeton::Chiffres(d) => d.to_string(),
            Jeton::Symbole(' ') => "␠".to_string(),
            Jeton::Symbole(c) => c.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
