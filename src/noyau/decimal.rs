// src/noyau/decimal.rs
//
// Décimal exact (sans flottants) : valeur = unscaled × 10^-scale.
// - add / sub / mul : exacts (aucun arrondi)
// - division + reste : échelle imposée, arrondi "demi loin de zéro" (HALF_UP)
// - égalité / ordre : numériques (2.50 == 2.5), l’affichage garde l’échelle (3.5000)

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::erreur::EvaluationError;

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// n / d arrondi au plus proche, égalité => loin de zéro. `d` non nul.
fn div_demi_loin_de_zero(n: &BigInt, d: &BigInt) -> BigInt {
    let q = n / d;
    let r = n % d;
    if r.is_zero() {
        return q;
    }
    if r.abs() * 2 >= d.abs() {
        if n.is_negative() != d.is_negative() {
            q - 1
        } else {
            q + 1
        }
    } else {
        q
    }
}

#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

impl Decimal {
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }
    }

    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Nombre de chiffres après la virgule.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Zéro numérique : `0.000` compte.
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Ramène les deux valeurs sur la plus grande échelle.
    fn aligne(&self, other: &Decimal) -> (BigInt, BigInt, u32) {
        let s = self.scale.max(other.scale);
        let a = &self.unscaled * pow10(s - self.scale);
        let b = &other.unscaled * pow10(s - other.scale);
        (a, b, s)
    }

    /// Change l’échelle ; si des chiffres tombent, arrondi demi loin de zéro.
    pub fn avec_echelle(&self, scale: u32) -> Decimal {
        if scale >= self.scale {
            Decimal::new(&self.unscaled * pow10(scale - self.scale), scale)
        } else {
            let q = div_demi_loin_de_zero(&self.unscaled, &pow10(self.scale - scale));
            Decimal::new(q, scale)
        }
    }

    /// Division à échelle fixe (arrondi demi loin de zéro). `None` si `rhs` vaut zéro.
    pub fn div_arrondi(&self, rhs: &Decimal, scale: u32) -> Option<Decimal> {
        if rhs.is_zero() {
            return None;
        }
        // (A/10^sa) / (B/10^sb) × 10^s = A×10^(sb+s) / (B×10^sa)
        let n = &self.unscaled * pow10(rhs.scale + scale);
        let d = &rhs.unscaled * pow10(self.scale);
        Some(Decimal::new(div_demi_loin_de_zero(&n, &d), scale))
    }

    /// Reste de la division tronquée (signe de `self`). `None` si `rhs` vaut zéro.
    pub fn reste(&self, rhs: &Decimal) -> Option<Decimal> {
        if rhs.is_zero() {
            return None;
        }
        let (a, b, s) = self.aligne(rhs);
        Some(Decimal::new(a % b, s))
    }

    /// Retire les zéros finaux de la partie fractionnaire (échelle >= 0).
    pub fn sans_zeros_inutiles(&self) -> Decimal {
        let dix = BigInt::from(10);
        let mut u = self.unscaled.clone();
        let mut s = self.scale;
        if u.is_zero() {
            return Decimal::zero();
        }
        while s > 0 && (&u % &dix).is_zero() {
            u /= &dix;
            s -= 1;
        }
        Decimal::new(u, s)
    }

    /// Écriture décimale simple, jamais d’exposant (ex: -0.005, 100).
    pub fn to_plain_string(&self) -> String {
        let mut chiffres = self.unscaled.magnitude().to_string();
        let signe = if self.unscaled.is_negative() { "-" } else { "" };

        if self.scale == 0 {
            return format!("{signe}{chiffres}");
        }

        let scale = self.scale as usize;
        while chiffres.len() <= scale {
            chiffres.insert(0, '0');
        }
        let (entiere, fraction) = chiffres.split_at(chiffres.len() - scale);
        format!("{signe}{entiere}.{fraction}")
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Decimal::new(BigInt::from(n), 0)
    }
}

/// Littéral : `[+-]? chiffres* ('.' chiffres*)?`, au moins un chiffre.
/// "5." et ".5" passent ; "", "." et "1.2.3" échouent.
impl FromStr for Decimal {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malforme = || EvaluationError::MalformedNumber(s.to_string());

        let (negatif, corps) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (entiere, fraction) = corps.split_once('.').unwrap_or((corps, ""));

        if entiere.is_empty() && fraction.is_empty() {
            return Err(malforme());
        }
        // parse_bytes accepte '_' et les signes : on valide nous-mêmes
        if !entiere
            .bytes()
            .chain(fraction.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(malforme());
        }

        let scale = u32::try_from(fraction.len()).map_err(|_| malforme())?;
        let chiffres = format!("{entiere}{fraction}");
        let n = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(malforme)?;

        Ok(Decimal::new(if negatif { -n } else { n }, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, _) = self.aligne(other);
        a.cmp(&b)
    }
}

/* ------------------------ Opérateurs exacts ------------------------ */

impl<'a, 'b> Add<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn add(self, rhs: &'b Decimal) -> Decimal {
        let (a, b, s) = self.aligne(rhs);
        Decimal::new(a + b, s)
    }
}

impl<'a, 'b> Sub<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &'b Decimal) -> Decimal {
        let (a, b, s) = self.aligne(rhs);
        Decimal::new(a - b, s)
    }
}

impl<'a, 'b> Mul<&'b Decimal> for &'a Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &'b Decimal) -> Decimal {
        Decimal::new(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}
