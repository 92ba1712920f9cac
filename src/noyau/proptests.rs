//! Tests de propriétés : forme canonique, identités, et oracle exact (BigRational).

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;
use proptest::prelude::*;

use super::arithmetique::pgcd;
use super::erreur::ErreurFraction;
use super::fraction::Fraction;

fn petit() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

fn petit_non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

fn non_nul() -> impl Strategy<Value = i64> {
    prop_oneof![(i64::MIN..=-1i64), (1i64..=i64::MAX)]
}

fn vers_big(x: &Fraction) -> BigRational {
    let s = x.signe().map(|s| s.facteur()).unwrap_or(1);
    let n = BigInt::from(x.numer().unwrap_or(0)) * BigInt::from(s);
    BigRational::new(n, BigInt::from(x.denom().unwrap_or(1)))
}

/// La forme réduite tient-elle en largeur fixe (u64 / u64) ?
fn tient(r: &BigRational) -> bool {
    r.numer().bits() <= 64 && r.denom().bits() <= 64
}

/// Compare un résultat exact borné à l’oracle : égalité, ou Overflow légitime.
fn conforme(r: Result<Fraction, ErreurFraction>, oracle: BigRational) -> bool {
    match r {
        Ok(x) => vers_big(&x) == oracle,
        Err(ErreurFraction::Overflow) => !tient(&oracle),
        Err(_) => false,
    }
}

proptest! {
    // Forme canonique

    #[test]
    fn canonique(n in any::<i64>(), d in non_nul()) {
        let x = Fraction::new(n, d).unwrap();
        let (xn, xd) = (x.numer().unwrap(), x.denom().unwrap());
        prop_assert!(xd > 0);
        prop_assert_eq!(pgcd(xn, xd), 1);
        prop_assert_eq!(vers_big(&x), BigRational::new(BigInt::from(n), BigInt::from(d)));
    }

    #[test]
    fn entier_aller_retour(k in any::<i64>()) {
        prop_assert_eq!(Fraction::from(k).to_fraction(false), k.to_string());
    }

    #[test]
    fn mixte_aller_retour(n in petit(), d in petit_non_nul()) {
        let x = Fraction::new(n, d).unwrap();
        prop_assert_eq!(Fraction::depuis(x.to_fraction(true).as_str()).unwrap(), x);
    }

    // Identités

    #[test]
    fn oppose(n in any::<i64>(), d in non_nul()) {
        let a = Fraction::new(n, d).unwrap();
        prop_assert!(a.add(a.neg()).unwrap().equals(0).unwrap());
    }

    #[test]
    fn inverse(n in non_nul(), d in non_nul()) {
        let a = Fraction::new(n, d).unwrap();
        prop_assert!(a.mul(a.inverse().unwrap()).unwrap().equals(1).unwrap());
    }

    #[test]
    fn comparaison_antisymetrique(a in any::<i64>(), b in non_nul(), c in any::<i64>(), d in non_nul()) {
        let x = Fraction::new(a, b).unwrap();
        let y = Fraction::new(c, d).unwrap();
        let xy = x.compare(y).unwrap().unwrap();
        prop_assert_eq!(xy, y.compare(x).unwrap().unwrap().reverse());
        prop_assert_eq!(xy, vers_big(&x).cmp(&vers_big(&y)));
        prop_assert_eq!(xy == Ordering::Equal, x.equals(y).unwrap());
    }

    // Oracle exact

    #[test]
    fn arithmetique_oracle(a in any::<i64>(), b in non_nul(), c in any::<i64>(), d in non_nul()) {
        let x = Fraction::new(a, b).unwrap();
        let y = Fraction::new(c, d).unwrap();
        let (bx, by) = (vers_big(&x), vers_big(&y));

        prop_assert!(conforme(x.add(y), &bx + &by));
        prop_assert!(conforme(x.sub(y), &bx - &by));
        prop_assert!(conforme(x.mul(y), &bx * &by));
        if c != 0 {
            prop_assert!(conforme(x.div(y), &bx / &by));
        }
    }

    #[test]
    fn arrondis_oracle(a in any::<i64>(), b in non_nul()) {
        let x = Fraction::new(a, b).unwrap();
        let bx = vers_big(&x);
        let demi = BigRational::new(BigInt::one(), BigInt::from(2));

        prop_assert!(conforme(x.floor(0), bx.floor()));
        prop_assert!(conforme(x.ceil(0), bx.ceil()));
        prop_assert!(conforme(x.round(0), (&bx + demi).floor()));
    }

    #[test]
    fn fraction_continue_relue(n in petit(), d in petit_non_nul()) {
        let x = Fraction::new(n, d).unwrap();
        let termes = x.to_continued();

        // reconstruction depuis la fin : a0 + 1/(a1 + 1/(...))
        let mut v = BigRational::from_integer(BigInt::from(*termes.last().unwrap()));
        for &t in termes.iter().rev().skip(1) {
            v = BigRational::from_integer(BigInt::from(t)) + v.recip();
        }
        prop_assert_eq!(v, vers_big(&x.abs()));
    }
}
