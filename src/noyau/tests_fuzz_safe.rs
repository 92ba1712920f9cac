//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la lecture et l’arithmétique sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueurs bornées
//! - budget temps global
//! - erreurs attendues : InvalidParameter, DivisionByZero, Overflow (jamais de panique)
//! - invariant clé : toute valeur acceptée est canonique et se relit à l’identique

use std::time::{Duration, Instant};

use super::arithmetique::pgcd;
use super::erreur::ErreurFraction;
use super::fraction::{Fraction, Signe};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn next_u64(&mut self) -> u64 {
        ((self.next_u32() as u64) << 32) | self.next_u32() as u64
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_canonique(x: &Fraction, contexte: &str) {
    let Some((n, d)) = x.numer().zip(x.denom()) else {
        return; // NaN
    };
    assert!(d > 0, "dénominateur nul: {contexte}");
    assert_eq!(pgcd(n, d), 1, "non réduit: {contexte}");
    if n == 0 {
        assert_eq!(x.signe(), Some(Signe::Positif), "zéro négatif: {contexte}");
    }

    // la forme texte se relit à l’identique
    let relu = Fraction::depuis(x.to_fraction(false).as_str())
        .unwrap_or_else(|e| panic!("relecture impossible ({e}): {contexte}"));
    assert_eq!(relu, *x, "relecture différente: {contexte}");
}

/* ------------------------ Génération bornée ------------------------ */

const MORCEAUX: [&str; 16] = [
    "0", "1", "7", "12", "300", "-", "+", ".", "/", ":", "(", ")", "'", " ", "x", "45",
];

fn gen_litteral(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(8) as usize;
    (0..n)
        .map(|_| MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize])
        .collect()
}

/// Littéral bien formé (pour avoir des succès).
fn gen_valide(rng: &mut Rng) -> String {
    let signe = if rng.coin() { "-" } else { "" };
    let a = rng.pick(1000);
    let b = 1 + rng.pick(99);
    match rng.pick(4) {
        0 => format!("{signe}{a}"),
        1 => format!("{signe}{a}/{b}"),
        2 => format!("{signe}{a} {}/{b}", rng.pick(b)),
        _ => format!("{signe}{a}.{}({})", rng.pick(100), rng.pick(100)),
    }
}

/// Fraction aux extrémités de la largeur fixe (pour provoquer Overflow).
fn gen_fraction(rng: &mut Rng) -> Fraction {
    let n = match rng.pick(3) {
        0 => rng.pick(50) as i64,
        1 => (rng.next_u64() >> 1) as i64,
        _ => i64::MAX - rng.pick(10) as i64,
    };
    let d = 1 + match rng.pick(3) {
        0 => rng.pick(50) as i64,
        1 => (rng.next_u64() >> 2) as i64,
        _ => rng.pick(1000) as i64,
    };
    let n = if rng.coin() { -n } else { n };
    Fraction::new(n, d).unwrap_or_else(|e| panic!("new({n}, {d}) err={e}"))
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_lecture_chaines() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for i in 0..2000 {
        budget(t0, max);

        let s = if i % 3 == 0 {
            gen_valide(&mut rng)
        } else {
            gen_litteral(&mut rng)
        };

        match Fraction::depuis(s.as_str()) {
            Ok(x) => {
                check_canonique(&x, &s);
                seen_ok += 1;
            }
            Err(e) => {
                // une chaîne n’est jamais une paire numérique
                assert_ne!(e, ErreurFraction::NonIntegerParameter, "s={s:?}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 100, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 100, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_arithmetique_bornee() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut seen_overflow = 0usize;

    for _ in 0..3000 {
        budget(t0, max);

        let a = gen_fraction(&mut rng);
        let b = gen_fraction(&mut rng);

        for (nom, r) in [
            ("add", a.add(b)),
            ("sub", a.sub(b)),
            ("mul", a.mul(b)),
            ("div", a.div(b)),
            ("mod", a.modulo(b)),
            ("gcd", a.gcd(b)),
            ("lcm", a.lcm(b)),
        ] {
            match r {
                Ok(x) => check_canonique(&x, &format!("{a:?} {nom} {b:?}")),
                Err(ErreurFraction::Overflow) => seen_overflow += 1,
                Err(ErreurFraction::DivisionByZero) => assert!(b.is_zero(), "{a:?} {nom} {b:?}"),
                Err(e) => panic!("erreur non attendue: {a:?} {nom} {b:?} err={e}"),
            }
        }

        // commutativité (quand le résultat tient)
        if let (Ok(x), Ok(y)) = (a.add(b), b.add(a)) {
            assert_eq!(x, y);
        }
        if let (Ok(x), Ok(y)) = (a.mul(b), b.mul(a)) {
            assert_eq!(x, y);
        }
    }

    assert!(seen_overflow > 0, "aucun dépassement vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme_rendus() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let rendus = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..200)
            .map(|_| {
                let x = gen_fraction(&mut rng);
                format!(
                    "{} | {} | {} | {:?}",
                    x.to_fraction(true),
                    x.to_latex(false),
                    x.to_decimal(20),
                    x.to_continued()
                )
            })
            .collect()
    };

    let a = rendus(42);
    budget(t0, max);
    let b = rendus(42);
    budget(t0, max);

    // Même seed => mêmes valeurs => mêmes rendus
    assert_eq!(a, b);
}
