use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::coefficient::SameDomain;
use crate::algebra::field::Field;
use crate::error::{FieldError, FieldResult};
use crate::utils::extended_gcd;

/// An integer modulo a runtime modulus `n`.
///
/// The value is always kept in `[0, n)`. Unlike a const-generic prime field,
/// the modulus travels with every value, so combining two `ModInt`s with
/// different moduli is a programming error and panics.
///
/// # Example
///
/// ```
/// use finfield::{Field, ModInt};
///
/// let a = ModInt::new(-3, 7);
/// assert_eq!(a.value(), 4);
///
/// let inv = a.inverse().unwrap();
/// assert_eq!(a * inv, ModInt::one(7));
/// ```
#[derive(Copy, Clone, Hash)]
pub struct ModInt {
    value: u32,
    modulus: u32,
}

impl ModInt {
    /// Create `value mod modulus`, wrapping negative values into `[0, modulus)`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn new(value: i64, modulus: u32) -> Self {
        assert!(modulus != 0, "ModInt modulus must be non-zero");
        let m = i64::from(modulus);
        Self {
            value: value.rem_euclid(m) as u32,
            modulus,
        }
    }

    /// Build from a value already reduced into `[0, modulus)`.
    #[inline]
    fn from_reduced(value: u64, modulus: u32) -> Self {
        debug_assert!(value < u64::from(modulus));
        Self {
            value: value as u32,
            modulus,
        }
    }

    /// The additive identity modulo `modulus`.
    pub fn zero(modulus: u32) -> Self {
        Self::new(0, modulus)
    }

    /// The multiplicative identity modulo `modulus`.
    pub fn one(modulus: u32) -> Self {
        Self::new(1, modulus)
    }

    /// The representative in `[0, modulus)`.
    pub const fn value(self) -> u32 {
        self.value
    }

    /// The modulus `n`.
    pub const fn modulus(self) -> u32 {
        self.modulus
    }

    /// Check if this is the zero residue.
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Compute `self^exp` using square-and-multiply.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::ModInt;
    ///
    /// let a = ModInt::new(3, 17);
    /// assert_eq!(a.pow(16), ModInt::one(17)); // Fermat: a^(p-1) = 1
    /// ```
    pub fn pow(self, exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::one(self.modulus);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }

    /// Assert that two residues share the same modulus.
    ///
    /// Runs in release builds too; mixing moduli is never silently coerced.
    #[inline]
    fn assert_same_modulus(self, other: Self) {
        assert!(
            self.modulus == other.modulus,
            "ModInt operands are taken modulo different values ({} and {})",
            self.modulus,
            other.modulus
        );
    }
}

impl PartialEq for ModInt {
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_modulus(*other);
        self.value == other.value
    }
}

impl Eq for ModInt {}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod {}", self.value, self.modulus)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<ModInt> for u32 {
    fn from(m: ModInt) -> Self {
        m.value
    }
}

impl SameDomain for ModInt {
    fn same_domain(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }
}

/* ---- standard arithmetic operators ---- */

impl Add for ModInt {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        let m = u64::from(self.modulus);
        Self::from_reduced((u64::from(self.value) + u64::from(rhs.value)) % m, self.modulus)
    }
}

impl Sub for ModInt {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        let m = u64::from(self.modulus);
        Self::from_reduced(
            (u64::from(self.value) + m - u64::from(rhs.value)) % m,
            self.modulus,
        )
    }
}

impl Mul for ModInt {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        let m = u64::from(self.modulus);
        Self::from_reduced((u64::from(self.value) * u64::from(rhs.value)) % m, self.modulus)
    }
}

impl Neg for ModInt {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        let m = u64::from(self.modulus);
        Self::from_reduced((m - u64::from(self.value)) % m, self.modulus)
    }
}

/// Division implemented via multiplicative inverse.
///
/// # Panics
///
/// Panics if `rhs` is not invertible modulo `n`. Use [`Field::try_div`] to
/// get the error instead.
impl Div for ModInt {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.assert_same_modulus(rhs);
        match self.try_div(&rhs) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

/* ---- implement Field ---- */

impl Field for ModInt {
    fn inverse(&self) -> FieldResult<Self> {
        let m = i64::from(self.modulus);
        let (g, x, _) = extended_gcd(i64::from(self.value), m);
        if g != 1 {
            return Err(FieldError::NotInvertible {
                value: self.value,
                modulus: self.modulus,
            });
        }
        Ok(Self::new(x, self.modulus))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ModInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.value, self.modulus), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ModInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (value, modulus) = <(i64, u32) as serde::Deserialize>::deserialize(deserializer)?;
        if modulus == 0 {
            return Err(serde::de::Error::custom("ModInt modulus must be non-zero"));
        }
        Ok(Self::new(value, modulus))
    }
}
