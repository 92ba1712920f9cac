// src/noyau/arithmetique.rs
//
// Outils de théorie des nombres (entiers machine) :
// - pgcd (Euclide itératif, générique sur les entiers non signés)
// - modpow (carré-multiplié)
// - factorise (essais par division)
// - cycle_len / cycle_start : période et décalage d’un développement décimal
//
// Les bornes de recherche sont des constantes : elles garantissent la terminaison,
// pas la détection de toutes les périodes (au-delà, on affiche sans parenthèses).

use num_traits::{PrimInt, Unsigned, Zero};
use std::collections::BTreeMap;

/// Profondeur max pour la période décimale. 1/7 = 0.(142857) : période 6.
pub const MAX_CYCLE_LEN: u32 = 2000;

/// Borne du décalage avant période (≈ log10 du plus grand dénominateur utile).
pub const MAX_CYCLE_START: u32 = 300;

/// pgcd(a, b) avec pgcd(0, x) = x et pgcd(x, 0) = x.
pub fn pgcd<T: PrimInt + Unsigned>(mut a: T, mut b: T) -> T {
    if a.is_zero() {
        return b;
    }
    if b.is_zero() {
        return a;
    }

    loop {
        a = a % b;
        if a.is_zero() {
            return b;
        }
        b = b % a;
        if b.is_zero() {
            return a;
        }
    }
}

/// base^exp mod m (m > 0), intermédiaires en u128.
pub fn modpow(base: u64, mut exp: u64, m: u64) -> u64 {
    let m = m as u128;
    let mut b = base as u128 % m;
    let mut r = 1 % m;

    while exp > 0 {
        if exp & 1 == 1 {
            r = r * b % m;
        }
        b = b * b % m;
        exp >>= 1;
    }

    r as u64
}

/// Décomposition en facteurs premiers : premier -> exposant.
/// 0 et 1 n’ont pas de facteurs (table vide).
pub fn factorise(n: u64) -> BTreeMap<u64, u32> {
    let mut facteurs = BTreeMap::new();
    if n < 2 {
        return facteurs;
    }

    let mut reste = n;
    while reste % 2 == 0 {
        reste /= 2;
        *facteurs.entry(2).or_insert(0) += 1;
    }

    // impairs seulement ; carre = i², (i+2)² = i² + 4i + 4
    let mut i: u64 = 3;
    let mut carre: u128 = 9;

    while carre <= reste as u128 {
        while reste % i == 0 {
            reste /= i;
            *facteurs.entry(i).or_insert(0) += 1;
        }
        carre += 4 * (i as u128 + 1);
        i += 2;
    }

    if reste > 1 {
        *facteurs.entry(reste).or_insert(0) += 1;
    }

    facteurs
}

/// Longueur de la période décimale de x/d (le numérateur n’intervient pas).
///
/// Les facteurs 2 et 5 ne jouent que sur la partie non périodique : on les retire,
/// puis on cherche l’ordre multiplicatif de 10 modulo le reste.
/// Renvoie 0 pour un décimal fini, ou si la période dépasse `MAX_CYCLE_LEN`.
pub fn cycle_len(mut d: u64) -> u32 {
    if d == 0 {
        return 0;
    }
    while d % 2 == 0 {
        d /= 2;
    }
    while d % 5 == 0 {
        d /= 5;
    }

    if d == 1 {
        return 0;
    }

    let d = d as u128;
    let mut rem = 10 % d;
    let mut t: u32 = 1;

    while rem != 1 {
        rem = rem * 10 % d;
        if t > MAX_CYCLE_LEN {
            return 0;
        }
        t += 1;
    }

    t
}

/// Plus petit t tel que 10^t ≡ 10^(t+len) (mod d) : nombre de chiffres avant la période.
pub fn cycle_start(d: u64, len: u32) -> u32 {
    if d == 0 {
        return 0;
    }

    let m = d as u128;
    let mut rem1: u128 = 1 % m;
    let mut rem2: u128 = modpow(10, len as u64, d) as u128;

    for t in 0..MAX_CYCLE_START {
        if rem1 == rem2 {
            return t;
        }
        rem1 = rem1 * 10 % m;
        rem2 = rem2 * 10 % m;
    }

    0
}
