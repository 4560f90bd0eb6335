//! Finite fields GF(p^n) and their elements.
//!
//! A [`FiniteField`] is described by a prime characteristic `p`, an extension
//! degree `n` and an irreducible polynomial of degree `n` over GF(p).
//! Elements are polynomials over GF(p) that borrow the field they live in, so
//! a field always outlives its elements.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};
use std::borrow::Cow;

use log::debug;

use crate::algebra::field::Field;
use crate::error::{FieldError, FieldResult};
use crate::structures::modint::ModInt;
use crate::structures::poly::Polynomial;
use crate::utils::is_prime;

/// The finite field GF(p^n).
///
/// Irreducibility of the polynomial is not checked; a reducible polynomial
/// yields a ring in which some non-zero elements have no inverse.
///
/// # Example
///
/// ```
/// use finfield::FiniteField;
///
/// // GF(9) = GF(3)[x] / (x^2 + 1)
/// let field = FiniteField::new(3, 2, &[1, 0, 1]).unwrap();
/// assert_eq!(field.order(), 9);
///
/// let x = field.element(&[0, 1]);
/// assert_eq!(&x * &x, field.element(&[2])); // x^2 = -1
/// ```
#[derive(Clone, Debug)]
pub struct FiniteField {
    p: u32,
    n: usize,
    order: u64,
    irreducible: Polynomial<ModInt>,
}

impl FiniteField {
    /// Create GF(p^n) from the integer coefficients of the irreducible
    /// polynomial, lowest degree first. Coefficients are reduced modulo `p`.
    ///
    /// # Errors
    ///
    /// - [`FieldError::NotPrime`] if `p` is not prime.
    /// - [`FieldError::WrongDegree`] if `n` is zero or the polynomial does not
    ///   have degree `n`.
    /// - [`FieldError::OrderOverflow`] if `p^n` does not fit into a `u64`.
    pub fn new(p: u32, n: usize, irreducible: &[i64]) -> FieldResult<Self> {
        // p must be checked before it is used as a modulus.
        Self::check_prime(p, n)?;
        Self::assemble(p, n, Polynomial::from_residues(irreducible, p))
    }

    /// Create GF(p^n) from an irreducible polynomial over GF(p).
    ///
    /// # Errors
    ///
    /// As [`FiniteField::new`], plus [`FieldError::WrongCharacteristic`] if
    /// the polynomial's zero or any of its coefficients is not taken modulo
    /// `p`.
    pub fn with_polynomial(
        p: u32,
        n: usize,
        irreducible: Polynomial<ModInt>,
    ) -> FieldResult<Self> {
        Self::check_prime(p, n)?;
        Self::assemble(p, n, irreducible)
    }

    fn check_prime(p: u32, n: usize) -> FieldResult<()> {
        if !is_prime(u64::from(p)) {
            debug!("rejected GF({}^{}): characteristic is not prime", p, n);
            return Err(FieldError::NotPrime { p: u64::from(p) });
        }
        Ok(())
    }

    /// Validate the remaining parameters for a prime `p` and build the field.
    fn assemble(p: u32, n: usize, irreducible: Polynomial<ModInt>) -> FieldResult<Self> {
        match Self::validate(p, n, &irreducible) {
            Ok(order) => {
                debug!("constructed GF({}^{}) modulo {}", p, n, irreducible);
                Ok(Self {
                    p,
                    n,
                    order,
                    irreducible,
                })
            }
            Err(e) => {
                // Debug output never compares coefficients, so it is safe on
                // polynomials with mixed moduli.
                debug!("rejected GF({}^{}) modulo {:?}: {}", p, n, irreducible, e);
                Err(e)
            }
        }
    }

    /// Check degree, characteristic and order width; returns the order.
    fn validate(p: u32, n: usize, irreducible: &Polynomial<ModInt>) -> FieldResult<u64> {
        if n == 0 || irreducible.degree() != n {
            return Err(FieldError::WrongDegree {
                expected: n,
                got: irreducible.degree(),
            });
        }
        let foreign = core::iter::once(irreducible.zero_element())
            .chain(irreducible.coefficients())
            .find(|c| c.modulus() != p);
        if let Some(c) = foreign {
            return Err(FieldError::WrongCharacteristic {
                expected: p,
                got: c.modulus(),
            });
        }

        u32::try_from(n)
            .ok()
            .and_then(|n| u64::from(p).checked_pow(n))
            .ok_or(FieldError::OrderOverflow { p, n })
    }

    /// The characteristic `p`.
    pub const fn p(&self) -> u32 {
        self.p
    }

    /// The extension degree `n`.
    pub const fn n(&self) -> usize {
        self.n
    }

    /// The number of elements, `p^n`.
    pub const fn order(&self) -> u64 {
        self.order
    }

    /// The irreducible polynomial elements are reduced by.
    pub fn irreducible(&self) -> &Polynomial<ModInt> {
        &self.irreducible
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement<'_> {
        FieldElement {
            poly: Polynomial::zero(ModInt::zero(self.p)),
            field: self,
        }
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement<'_> {
        FieldElement {
            poly: Polynomial::constant(ModInt::one(self.p), ModInt::zero(self.p)),
            field: self,
        }
    }

    /// Wrap integer coefficients (lowest degree first) as an element.
    ///
    /// Coefficients are reduced modulo `p`; the polynomial itself is not
    /// reduced modulo the irreducible polynomial. See [`FieldElement::reduced`].
    pub fn element(&self, coeffs: &[i64]) -> FieldElement<'_> {
        FieldElement {
            poly: Polynomial::from_residues(coeffs, self.p),
            field: self,
        }
    }

    /// Wrap a polynomial over GF(p) as an element, without reducing it.
    ///
    /// # Panics
    ///
    /// Panics if the coefficients are not taken modulo `p`.
    pub fn element_from_poly(&self, poly: Polynomial<ModInt>) -> FieldElement<'_> {
        assert!(
            poly.modulus() == self.p,
            "polynomial over GF({}) used as an element of {}",
            poly.modulus(),
            self
        );
        FieldElement { poly, field: self }
    }

    /// Iterate over every element of the field.
    ///
    /// The `k`-th element has the base-`p` digits of `k` as coefficients, so
    /// the sequence starts with zero and one.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::FiniteField;
    ///
    /// let field = FiniteField::new(2, 2, &[1, 1, 1]).unwrap();
    /// let nonzero = field.elements().filter(|e| !e.is_zero()).count();
    /// assert_eq!(nonzero, 3);
    /// ```
    pub fn elements(&self) -> impl Iterator<Item = FieldElement<'_>> + '_ {
        (0..self.order).map(move |k| self.element_by_index(k))
    }

    fn element_by_index(&self, mut k: u64) -> FieldElement<'_> {
        let p = u64::from(self.p);
        let mut coeffs = Vec::with_capacity(self.n);
        for _ in 0..self.n {
            coeffs.push((k % p) as i64);
            k /= p;
        }
        self.element(&coeffs)
    }

    /// Draw a uniformly random element.
    #[cfg(feature = "rand")]
    pub fn random_element<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> FieldElement<'_> {
        let coeffs: Vec<i64> = (0..self.n)
            .map(|_| i64::from(rng.gen_range(0..self.p)))
            .collect();
        self.element(&coeffs)
    }

    /// Reduce a polynomial over GF(p) modulo the irreducible polynomial.
    pub(crate) fn reduce(&self, poly: &Polynomial<ModInt>) -> Polynomial<ModInt> {
        poly.long_division(&self.irreducible).1
    }
}

impl PartialEq for FiniteField {
    fn eq(&self, other: &Self) -> bool {
        // Polynomials over different characteristics cannot be compared.
        self.p == other.p && self.n == other.n && self.irreducible == other.irreducible
    }
}

impl Eq for FiniteField {}

impl Hash for FiniteField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.p.hash(state);
        self.n.hash(state);
        self.irreducible.hash(state);
    }
}

impl fmt::Display for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.order)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FiniteField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&crate::config::FieldConfig::from(self), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FiniteField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let config = <crate::config::FieldConfig as serde::Deserialize>::deserialize(deserializer)?;
        config.build().map_err(serde::de::Error::custom)
    }
}

/// An element of a [`FiniteField`].
///
/// Binary operators panic if the operands belong to different fields.
/// Multiplication always reduces modulo the field's irreducible polynomial;
/// addition and subtraction keep the degree below `n` on their own.
#[derive(Clone)]
pub struct FieldElement<'f> {
    poly: Polynomial<ModInt>,
    field: &'f FiniteField,
}

impl<'f> FieldElement<'f> {
    /// The polynomial representing this element.
    pub fn polynomial(&self) -> &Polynomial<ModInt> {
        &self.poly
    }

    /// The field this element belongs to.
    pub fn field(&self) -> &'f FiniteField {
        self.field
    }

    /// Coefficient of `x^i` (zero past the degree).
    pub fn coeff(&self, i: usize) -> ModInt {
        self.poly.coeff(i)
    }

    /// The element with its polynomial reduced modulo the irreducible
    /// polynomial, so its degree is below `n`.
    pub fn reduced(&self) -> Self {
        Self {
            poly: self.canonical().into_owned(),
            field: self.field,
        }
    }

    /// Check if this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.canonical().is_zero()
    }

    /// Check if this is the multiplicative identity.
    pub fn is_one(&self) -> bool {
        let canonical = self.canonical();
        canonical.degree() == 0 && canonical[0] == ModInt::one(self.field.p)
    }

    /// Compute `self^exp` by square-and-multiply.
    ///
    /// The exponent is first reduced modulo `order - 1`, the order of the
    /// multiplicative group. `0^0` is one and `0^k` is zero for `k > 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::FiniteField;
    ///
    /// let field = FiniteField::new(5, 2, &[2, 0, 1]).unwrap();
    /// let a = field.element(&[3, 4]);
    /// assert!(a.pow(24).is_one());
    /// ```
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = self.reduced();
        if base.poly.is_zero() {
            return if exp == 0 {
                self.field.one()
            } else {
                self.field.zero()
            };
        }

        let mut e = exp % (self.field.order - 1);
        let mut result = self.field.one();
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            e >>= 1;
        }
        result
    }

    /// Compute `self^exp` for a possibly negative exponent.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] for zero raised to a negative
    /// power.
    pub fn pow_signed(&self, exp: i64) -> FieldResult<Self> {
        if exp >= 0 {
            return Ok(self.pow(exp as u64));
        }
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        // a^(q-1) = 1, so a^-k = a^((-k) mod (q-1)).
        let group_order = i128::from(self.field.order - 1);
        Ok(self.pow(i128::from(exp).rem_euclid(group_order) as u64))
    }

    /// The polynomial reduced below degree `n`, borrowed when it already is.
    fn canonical(&self) -> Cow<'_, Polynomial<ModInt>> {
        if self.poly.degree() < self.field.n {
            Cow::Borrowed(&self.poly)
        } else {
            Cow::Owned(self.field.reduce(&self.poly))
        }
    }

    /// Assert that two elements share the same field.
    ///
    /// Runs in release builds too.
    fn assert_same_field(&self, other: &Self) {
        assert!(
            core::ptr::eq(self.field, other.field) || self.field == other.field,
            "elements are from different fields"
        );
    }
}

impl Field for FieldElement<'_> {
    /// Inverse as `self^(order - 2)`.
    fn inverse(&self) -> FieldResult<Self> {
        if self.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.pow(self.field.order - 2))
    }
}

impl PartialEq for FieldElement<'_> {
    /// Compares the reduced polynomials.
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_field(other);
        self.canonical() == other.canonical()
    }
}

impl Eq for FieldElement<'_> {}

impl Hash for FieldElement<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.canonical().hash(state);
    }
}

/* ---- Arithmetic operators ---- */

impl<'f> Add for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: Self) -> FieldElement<'f> {
        self.assert_same_field(rhs);
        FieldElement {
            poly: &self.poly + &rhs.poly,
            field: self.field,
        }
    }
}

impl<'f> Add for FieldElement<'f> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<'f> Sub for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: Self) -> FieldElement<'f> {
        self.assert_same_field(rhs);
        FieldElement {
            poly: &self.poly - &rhs.poly,
            field: self.field,
        }
    }
}

impl<'f> Sub for FieldElement<'f> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<'f> Neg for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> FieldElement<'f> {
        FieldElement {
            poly: -&self.poly,
            field: self.field,
        }
    }
}

impl<'f> Neg for FieldElement<'f> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<'f> Mul for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: Self) -> FieldElement<'f> {
        self.assert_same_field(rhs);
        FieldElement {
            poly: self.field.reduce(&(&self.poly * &rhs.poly)),
            field: self.field,
        }
    }
}

impl<'f> Mul for FieldElement<'f> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

/// Division through the inverse of the divisor.
///
/// # Panics
///
/// Panics if `rhs` is zero. Use [`Field::try_div`] to get the error instead.
impl<'f> Div for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn div(self, rhs: Self) -> FieldElement<'f> {
        self.assert_same_field(rhs);
        match self.try_div(rhs) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'f> Div for FieldElement<'f> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} in {}", self.poly, self.field)
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.poly, self.field)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldElement<'_> {
    /// Serialized as its coefficient values, lowest degree first.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let values: Vec<u32> = self.poly.coefficients().iter().map(|c| c.value()).collect();
        serde::Serialize::serialize(&values, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf27() -> FiniteField {
        // x^3 + 2x + 1 is irreducible over GF(3)
        FiniteField::new(3, 3, &[1, 2, 0, 1]).unwrap()
    }

    fn gf25() -> FiniteField {
        FiniteField::new(5, 2, &[2, 0, 1]).unwrap()
    }

    #[test]
    fn construction() {
        let f = gf27();
        assert_eq!(f.p(), 3);
        assert_eq!(f.n(), 3);
        assert_eq!(f.order(), 27);
        assert_eq!(f.irreducible().degree(), 3);
        assert_eq!(f.to_string(), "GF(27)");
    }

    #[test]
    fn rejects_composite_characteristic() {
        assert_eq!(
            FiniteField::new(4, 2, &[1, 1, 1]).unwrap_err(),
            FieldError::NotPrime { p: 4 }
        );
        assert_eq!(
            FiniteField::new(0, 1, &[0, 1]).unwrap_err(),
            FieldError::NotPrime { p: 0 }
        );
        // characteristic is checked before the polynomial's degree
        let poly = Polynomial::from_residues(&[1, 1], 4);
        assert_eq!(
            FiniteField::with_polynomial(4, 3, poly).unwrap_err(),
            FieldError::NotPrime { p: 4 }
        );
    }

    #[test]
    fn rejects_wrong_degree() {
        assert_eq!(
            FiniteField::new(3, 3, &[1, 1]).unwrap_err(),
            FieldError::WrongDegree {
                expected: 3,
                got: 1
            }
        );
        // trailing coefficients that vanish mod p lower the degree
        assert_eq!(
            FiniteField::new(3, 2, &[1, 0, 3]).unwrap_err(),
            FieldError::WrongDegree {
                expected: 2,
                got: 0
            }
        );
        assert!(matches!(
            FiniteField::new(3, 0, &[1]),
            Err(FieldError::WrongDegree { expected: 0, .. })
        ));
    }

    #[test]
    fn rejects_wrong_characteristic() {
        let poly = Polynomial::from_residues(&[1, 0, 1], 7);
        assert_eq!(
            FiniteField::with_polynomial(3, 2, poly).unwrap_err(),
            FieldError::WrongCharacteristic {
                expected: 3,
                got: 7
            }
        );
    }

    #[test]
    fn rejects_mixed_moduli_in_coefficients() {
        // zero and leading coefficient are mod 5, the constant term is mod 7
        let mixed = Polynomial::new(vec![ModInt::new(1, 7), ModInt::new(1, 5)], ModInt::zero(5));
        assert_eq!(mixed.modulus(), 5);
        assert_eq!(
            FiniteField::with_polynomial(5, 1, mixed).unwrap_err(),
            FieldError::WrongCharacteristic {
                expected: 5,
                got: 7
            }
        );
    }

    #[test]
    fn rejects_order_overflow() {
        let mut coeffs = vec![0; 65];
        coeffs[0] = 1;
        coeffs[64] = 1;
        assert_eq!(
            FiniteField::new(2, 64, &coeffs).unwrap_err(),
            FieldError::OrderOverflow { p: 2, n: 64 }
        );
    }

    #[test]
    fn field_equality() {
        assert_eq!(gf27(), gf27());
        assert_ne!(gf27(), gf25());
        // same p and n, different polynomial
        let other = FiniteField::new(3, 3, &[2, 2, 0, 1]).unwrap();
        assert_ne!(gf27(), other);
    }

    #[test]
    fn element_does_not_reduce() {
        let f = gf27();
        let e = f.element(&[0, 0, 0, 1]);
        assert_eq!(e.polynomial().degree(), 3);
        // x^3 = -2x - 1 = x + 2
        assert_eq!(e.reduced().polynomial(), f.element(&[2, 1]).polynomial());
        assert_eq!(e, f.element(&[2, 1]));
    }

    #[test]
    fn identities() {
        let f = gf27();
        assert!(f.zero().is_zero());
        assert!(f.one().is_one());
        assert!(!f.one().is_zero());
        assert!(f.element(&[0, 0, 0]).is_zero());
        assert!(f.element(&[4]).is_one());
    }

    #[test]
    fn addition_and_negation() {
        let f = gf27();
        let a = f.element(&[1, 2, 2]);
        let b = f.element(&[2, 2, 1]);
        assert_eq!(&a + &b, f.element(&[0, 1, 0]));
        assert!((&a + &(-&a)).is_zero());
        assert_eq!(&a - &a, f.zero());
    }

    #[test]
    fn multiplication_reduces() {
        let f = gf27();
        let x = f.element(&[0, 1]);
        let x2 = &x * &x;
        let x3 = &x2 * &x;
        assert!(x3.polynomial().degree() < 3);
        assert_eq!(x3, f.element(&[2, 1]));
    }

    #[test]
    fn inverse_all_nonzero() {
        let f = gf25();
        for a in f.elements().filter(|e| !e.is_zero()) {
            let inv = a.inverse().unwrap();
            assert!((&a * &inv).is_one(), "{} has a wrong inverse", a);
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert_eq!(gf25().zero().inverse(), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn division() {
        let f = gf25();
        let a = f.element(&[3, 1]);
        let b = f.element(&[1, 4]);
        let q = &a / &b;
        assert_eq!(&q * &b, a);
        assert_eq!(a.try_div(&f.zero()), Err(FieldError::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn division_by_zero_panics() {
        let f = gf25();
        let _ = f.one() / f.zero();
    }

    #[test]
    fn pow_small_exponents() {
        let f = gf27();
        let a = f.element(&[1, 1]);
        assert!(a.pow(0).is_one());
        assert_eq!(a.pow(1), a);
        assert_eq!(a.pow(3), &(&a * &a) * &a);
    }

    #[test]
    fn pow_reduces_exponent() {
        let f = gf27();
        let a = f.element(&[2, 0, 1]);
        assert!(a.pow(26).is_one());
        assert_eq!(a.pow(27), a);
        assert_eq!(a.pow(26 * 1000 + 5), a.pow(5));
    }

    #[test]
    fn pow_of_zero() {
        let f = gf27();
        assert!(f.zero().pow(0).is_one());
        assert!(f.zero().pow(26).is_zero());
        assert!(f.zero().pow(7).is_zero());
    }

    #[test]
    fn pow_signed_negative() {
        let f = gf25();
        let a = f.element(&[4, 2]);
        assert_eq!(a.pow_signed(-1).unwrap(), a.inverse().unwrap());
        assert_eq!(a.pow_signed(-3).unwrap(), a.inverse().unwrap().pow(3));
        assert_eq!(a.pow_signed(6).unwrap(), a.pow(6));
        assert_eq!(f.zero().pow_signed(-2), Err(FieldError::DivisionByZero));
    }

    #[test]
    fn elements_enumerates_field() {
        let f = gf27();
        let all: Vec<_> = f.elements().collect();
        assert_eq!(all.len(), 27);
        assert!(all[0].is_zero());
        assert!(all[1].is_one());

        let distinct: std::collections::HashSet<_> = all.iter().cloned().collect();
        assert_eq!(distinct.len(), 27);
    }

    #[test]
    fn gf2_trivial_extension() {
        let f = FiniteField::new(2, 1, &[0, 1]).unwrap();
        assert_eq!(f.order(), 2);
        assert!(f.one().inverse().unwrap().is_one());
        assert!(f.one().pow(5).is_one());
    }

    #[test]
    #[should_panic(expected = "elements are from different fields")]
    fn mixing_fields_panics() {
        let f = gf27();
        let g = FiniteField::new(3, 3, &[2, 2, 0, 1]).unwrap();
        let _ = &f.one() + &g.one();
    }

    #[test]
    #[should_panic(expected = "elements are from different fields")]
    fn comparing_across_fields_panics() {
        let f = gf27();
        let g = gf25();
        let _ = f.one() == g.one();
    }

    #[test]
    fn equal_fields_mix() {
        let f = gf27();
        let g = gf27();
        assert_eq!(&f.one() + &g.one(), f.element(&[2]));
    }

    #[test]
    #[should_panic(expected = "polynomial over GF(7)")]
    fn element_from_foreign_polynomial_panics() {
        let f = gf25();
        let _ = f.element_from_poly(Polynomial::from_residues(&[1, 1], 7));
    }

    #[test]
    fn display() {
        let f = gf25();
        assert_eq!(f.element(&[3, 1]).to_string(), "3 + 1*x in GF(25)");
        assert_eq!(f.zero().to_string(), "0 in GF(25)");
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn field_roundtrip() {
        let f = FiniteField::new(3, 3, &[1, 2, 0, 1]).unwrap();
        let json = serde_json::to_string(&f).unwrap();
        let back: FiniteField = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn field_rejects_invalid() {
        let json = r#"{"p":4,"n":1,"irreducible":[1,1]}"#;
        assert!(serde_json::from_str::<FiniteField>(json).is_err());
    }

    #[test]
    fn element_serializes_as_values() {
        let f = FiniteField::new(5, 2, &[2, 0, 1]).unwrap();
        let e = f.element(&[3, -1]);
        assert_eq!(serde_json::to_string(&e).unwrap(), "[3,4]");
    }
}
