//! Tests scientifiques (campagne) : invariants + scénarios + limites contrôlées.
//!
//! But : vérifier les propriétés de la valeur canonique sans faire chauffer la machine.
//! - budget temps global sur les balayages
//! - grilles bornées (petits numérateurs / dénominateurs)
//! - scénarios de référence calculés à la main

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use super::arithmetique::pgcd;
use super::erreur::ErreurFraction;
use super::fraction::{Fraction, Signe};

fn f(n: i64, d: i64) -> Fraction {
    Fraction::new(n, d).unwrap_or_else(|e| panic!("new({n}, {d}) err={e}"))
}

fn lit(s: &str) -> Fraction {
    Fraction::depuis(s).unwrap_or_else(|e| panic!("depuis({s:?}) err={e}"))
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

fn assert_canonique(x: &Fraction) {
    let (n, d) = (x.numer().unwrap(), x.denom().unwrap());
    assert!(d > 0, "dénominateur nul pour {x:?}");
    assert_eq!(pgcd(n, d), 1, "non réduit : {x:?}");
    if n == 0 {
        assert_eq!(x.signe(), Some(Signe::Positif), "zéro négatif : {x:?}");
    }
}

/// Petite grille de valeurs (signes, entiers, fractions propres/impropres).
fn grille() -> Vec<Fraction> {
    let mut out = Vec::new();
    for n in -12i64..=12 {
        for d in [1i64, 2, 3, 4, 6, 7, 9, 12] {
            out.push(f(n, d));
        }
    }
    out
}

/* ------------------------ Forme canonique ------------------------ */

#[test]
fn sci_forme_canonique_grille() {
    let start = Instant::now();
    for n in -60i64..=60 {
        for d in -60i64..=60 {
            if d == 0 {
                continue;
            }
            assert_canonique(&f(n, d));
        }
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn sci_scenario_normalisation_signe() {
    let x = f(-3, 6);
    assert_eq!(x.signe(), Some(Signe::Negatif));
    assert_eq!(x.numer(), Some(1));
    assert_eq!(x.denom(), Some(2));

    // signe porté par le dénominateur
    assert_eq!(f(3, -6), x);
    assert_eq!(f(-3, -6), f(1, 2));
}

#[test]
fn sci_scenario_division_par_zero() {
    assert_eq!(Fraction::new(1, 0), Err(ErreurFraction::DivisionByZero));
    assert_eq!(Fraction::depuis("1/0"), Err(ErreurFraction::DivisionByZero));
    assert_eq!(Fraction::depuis((5, 0)), Err(ErreurFraction::DivisionByZero));
    assert_eq!(f(1, 2).div(0), Err(ErreurFraction::DivisionByZero));
    assert_eq!(Fraction::zero().inverse(), Err(ErreurFraction::DivisionByZero));
}

/* ------------------------ Allers-retours texte ------------------------ */

#[test]
fn sci_entiers_aller_retour() {
    for k in [-1_000_000i64, -42, -1, 0, 1, 7, 123_456_789, i64::MAX, i64::MIN + 1] {
        assert_eq!(Fraction::from(k).to_fraction(false), k.to_string(), "k={k}");
    }
}

#[test]
fn sci_chaines_n_sur_d() {
    let start = Instant::now();
    for n in -30i64..=30 {
        for d in 1i64..=30 {
            let x = lit(&format!("{n}/{d}"));
            let g = pgcd(n.unsigned_abs(), d as u64);
            assert_eq!(x.numer(), Some(n.unsigned_abs() / g));
            assert_eq!(x.denom(), Some(d as u64 / g));
            if n != 0 {
                assert_eq!(x.signe(), Some(Signe::de(n as i128)));
            }
        }
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn sci_chaine_periodique_mixte() {
    // 123.45(6) = 123 + 45/100 + 6/900 = 37037/300
    assert!(lit("123.45(6)").equals(f(37037, 300)).unwrap());
    assert_eq!(lit("123.45'6'"), f(37037, 300));
    assert_eq!(lit("123.(456)"), f(41111, 333));
    assert_eq!(lit("-1 1/2"), f(-3, 2));
    assert_eq!(lit("3:4"), f(3, 4));
}

/* ------------------------ Identités arithmétiques ------------------------ */

#[test]
fn sci_identite_oppose() {
    for a in grille() {
        assert!(a.add(a.neg()).unwrap().equals(0).unwrap(), "a={a:?}");
    }
}

#[test]
fn sci_identite_inverse() {
    for a in grille().into_iter().filter(|a| !a.is_zero()) {
        assert!(a.mul(a.inverse().unwrap()).unwrap().equals(1).unwrap(), "a={a:?}");
    }
}

#[test]
fn sci_comparaison_antisymetrique() {
    let start = Instant::now();
    let g = grille();
    for a in &g {
        for b in &g {
            let ab = a.compare(b).unwrap().unwrap();
            let ba = b.compare(a).unwrap().unwrap();
            assert_eq!(ab, ba.reverse(), "a={a:?} b={b:?}");
            assert_eq!(ab == Ordering::Equal, a.equals(b).unwrap());
        }
        budget(start, Duration::from_secs(5));
    }
}

#[test]
fn sci_scenario_soustraction() {
    assert!(f(9, 4).sub(f(1, 2)).unwrap().equals(f(7, 4)).unwrap());
    // forme équivalente : opérande lu à la volée
    assert_eq!(f(9, 4).sub("1/2").unwrap(), f(7, 4));
    assert_eq!(f(9, 4).sub((1, 2)).unwrap(), f(7, 4));
}

/* ------------------------ Rendus décimaux ------------------------ */

#[test]
fn sci_rendus_decimaux() {
    assert_eq!(f(1, 3).to_string(), "0.(3)");
    assert_eq!(f(1, 7).to_string(), "0.(142857)");
    assert_eq!(f(1, 2).to_string(), "0.5");
}

#[test]
fn sci_decimal_relu() {
    // un rendu périodique relu redonne la même valeur
    let start = Instant::now();
    for d in 1i64..=60 {
        for n in [-7i64, 1, 5, 13] {
            let x = f(n, d);
            assert_eq!(lit(&x.to_string()), x, "x={x:?} rendu={}", x);
        }
        budget(start, Duration::from_secs(5));
    }
}

/* ------------------------ Puissance / simplify ------------------------ */

#[test]
fn sci_scenario_racine_irrationnelle() {
    assert_eq!(Fraction::from(2i64).pow(f(1, 2)), Ok(None));
}

#[test]
fn sci_racine_grand_premier_rapide() {
    // premiers proches de 2^63 et 2^64 : aucune racine, réponse immédiate
    let start = Instant::now();
    let p = Fraction::new(9_223_372_036_854_775_783, 1).unwrap();
    assert_eq!(p.pow(f(1, 2)), Ok(None));
    assert_eq!(p.inverse().unwrap().pow(f(-2, 3)), Ok(None));
    let q = Fraction::depuis("18446744073709551557").unwrap();
    assert_eq!(q.pow(f(1, 2)), Ok(None));
    budget(start, Duration::from_secs(1));
}

#[test]
fn sci_simplify_tolerance() {
    let x = Fraction::depuis(0.333).unwrap();
    assert!(x.simplify(0.01).equals(f(1, 3)).unwrap());
    assert!(!x.simplify(0.0000001).equals(f(1, 3)).unwrap());
}

/* ------------------------ NaN ------------------------ */

#[test]
fn sci_nan_se_propage() {
    let nan = Fraction::depuis(f64::NAN).unwrap();
    assert!(nan.is_nan());
    for r in [
        nan.add(1),
        nan.sub(1),
        nan.mul(2),
        nan.div(2),
        f(1, 2).add(nan),
        nan.gcd(3),
        nan.lcm(3),
        nan.round(2),
    ] {
        assert!(r.unwrap().is_nan());
    }
    assert!(Fraction::depuis(f64::INFINITY).unwrap().is_nan());
    assert_eq!(nan.to_string(), "NaN");
}
