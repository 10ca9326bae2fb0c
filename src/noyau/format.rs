// src/noyau/format.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Rationnel => texte décimal affichable.
/// - entier : "7", "-3"
/// - décimal fini : exact si tient dans `digits` chiffres ("2.5")
/// - sinon : tronqué à `digits` chiffres, zéros finaux retirés ("0.3333333333")
/// - jamais "-0"
pub fn format_resultat(r: &BigRational, digits: usize) -> String {
    if r.denom().is_one() {
        return format!("{}", r.numer());
    }

    let neg = r.is_negative();
    let abs = r.abs();

    // floor(|r| * 10^digits) : troncature vers zéro une fois le signe remis
    let scale = pow10(digits);
    let scaled = (abs.numer() * &scale) / abs.denom();
    if scaled.is_zero() {
        return "0".to_string();
    }

    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let mut frac = if digits == 0 {
        String::new()
    } else {
        let mut f = frac_part.to_str_radix(10);
        while f.len() < digits {
            f.insert(0, '0');
        }
        f
    };
    while frac.ends_with('0') {
        frac.pop();
    }

    let signe = if neg { "-" } else { "" };
    if frac.is_empty() {
        format!("{signe}{int_part}")
    } else {
        format!("{signe}{int_part}.{frac}")
    }
}
