use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Index, Mul, Neg, Rem, Sub};

use crate::algebra::coefficient::{Coefficient, SameDomain};
use crate::error::{FieldError, FieldResult};
use crate::structures::modint::ModInt;

/// Polynomial over an arbitrary coefficient type `T`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// Since `T` has no compile-time zero (a [`ModInt`] zero depends on its
/// modulus), every polynomial carries its own zero value. It is used for
/// canonicalization and as the implicit value of every coefficient past the
/// degree. The zero polynomial is stored as `[zero]` and has degree 0.
///
/// # Example
///
/// ```
/// use finfield::Polynomial;
///
/// // 3 + 2x + x^2, trailing zeros are dropped
/// let p = Polynomial::new(vec![3, 2, 1, 0, 0], 0);
/// assert_eq!(p.degree(), 2);
/// assert_eq!(p[7], 0);
/// ```
#[derive(Clone)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
    zero: T,
}

impl<T: Coefficient> Polynomial<T> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// Trailing zeros are removed. An empty vector yields the zero polynomial.
    pub fn new(coeffs: Vec<T>, zero: T) -> Self {
        let mut poly = Self { coeffs, zero };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero(zero: T) -> Self {
        Self {
            coeffs: vec![zero.clone()],
            zero,
        }
    }

    /// Create a constant polynomial.
    pub fn constant(c: T, zero: T) -> Self {
        Self::new(vec![c], zero)
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::Polynomial;
    ///
    /// let m = Polynomial::monomial(3, 2, 0); // 3x^2
    /// assert_eq!(m.coefficients(), &[0, 0, 3]);
    /// ```
    pub fn monomial(c: T, n: usize, zero: T) -> Self {
        let mut coeffs = vec![zero.clone(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs, zero)
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0] == self.zero
    }

    /// Get the degree of the polynomial.
    ///
    /// The zero polynomial and non-zero constants both have degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Get the leading coefficient (the zero value for the zero polynomial).
    pub fn leading_coeff(&self) -> &T {
        &self.coeffs[self.coeffs.len() - 1]
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns the zero value if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> T {
        self[i].clone()
    }

    /// Get a slice of all stored coefficients.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// The zero value this polynomial is canonicalized against.
    pub fn zero_element(&self) -> &T {
        &self.zero
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::Polynomial;
    ///
    /// // p(x) = 1 + 2x + 3x^2
    /// let p = Polynomial::new(vec![1, 2, 3], 0);
    /// assert_eq!(p.eval(&2), 17);
    /// ```
    pub fn eval(&self, x: &T) -> T {
        let mut result = self.zero.clone();
        for coeff in self.coeffs.iter().rev() {
            result = result * x.clone() + coeff.clone();
        }
        result
    }

    /// Remove trailing zero coefficients, keeping at least the constant term.
    fn normalize(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last() == Some(&self.zero) {
            self.coeffs.pop();
        }
        if self.coeffs.is_empty() {
            self.coeffs.push(self.zero.clone());
        }
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` with `self = q * divisor + r` and either `r` zero or
    /// `deg(r) < deg(divisor)`, provided `T` is a field. Leading coefficients
    /// are divided with `T`'s `/`, so a non-invertible leading coefficient
    /// surfaces whatever `T` does for that case.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if the divisor is the zero
    /// polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::Polynomial;
    ///
    /// let a = Polynomial::new(vec![39, -52, -16, 5, -5, 1], 0);
    /// let b = Polynomial::new(vec![8, -5, -2, 1], 0);
    /// let (q, r) = a.div_rem(&b).unwrap();
    ///
    /// assert_eq!(q, Polynomial::new(vec![4, -3, 1], 0));
    /// assert_eq!(r, Polynomial::new(vec![7, -8, -31], 0));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> FieldResult<(Self, Self)> {
        self.assert_same_zero(divisor);
        if divisor.is_zero() {
            return Err(FieldError::DivisionByZero);
        }
        Ok(self.long_division(divisor))
    }

    /// Compute the remainder of division.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::DivisionByZero`] if the divisor is zero.
    pub fn rem(&self, divisor: &Self) -> FieldResult<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Long division by a divisor known to be non-zero.
    pub(crate) fn long_division(&self, divisor: &Self) -> (Self, Self) {
        let divisor_deg = divisor.degree();
        if self.degree() < divisor_deg {
            return (Self::zero(self.zero.clone()), self.clone());
        }

        let lead = divisor.leading_coeff().clone();
        let mut quotient = vec![self.zero.clone(); self.degree() - divisor_deg + 1];
        let mut remainder = self.clone();

        while !remainder.is_zero() && remainder.degree() >= divisor_deg {
            let shift = remainder.degree() - divisor_deg;
            let factor = remainder.leading_coeff().clone() / lead.clone();

            // remainder -= factor * x^shift * divisor
            for (i, d) in divisor.coeffs.iter().enumerate() {
                let slot = &mut remainder.coeffs[i + shift];
                *slot = slot.clone() - factor.clone() * d.clone();
            }
            quotient[shift] = factor;

            // Over a field the top slot is now exactly zero. Dropping it
            // unconditionally also bounds the loop for integer coefficients.
            remainder.coeffs.pop();
            remainder.normalize();
        }

        (Self::new(quotient, self.zero.clone()), remainder)
    }

    /// Assert that two polynomials share the same zero value.
    fn assert_same_zero(&self, other: &Self) {
        assert!(
            self.zero == other.zero,
            "polynomials have different zero elements"
        );
    }
}

impl Polynomial<ModInt> {
    /// Build a polynomial over `Z/pZ` from integer coefficients in ascending
    /// order, reducing each one modulo `p`.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::Polynomial;
    ///
    /// // x^2 + 2 over GF(5), written with a negative constant
    /// let f = Polynomial::from_residues(&[-3, 0, 1], 5);
    /// assert_eq!(f.coeff(0).value(), 2);
    /// ```
    pub fn from_residues(coeffs: &[i64], p: u32) -> Self {
        let coeffs = coeffs.iter().map(|&c| ModInt::new(c, p)).collect();
        Self::new(coeffs, ModInt::zero(p))
    }

    /// The modulus of the coefficients.
    pub fn modulus(&self) -> u32 {
        self.zero.modulus()
    }
}

impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    /// Coefficient of `x^i`; the zero value past the degree.
    fn index(&self, i: usize) -> &T {
        self.coeffs.get(i).unwrap_or(&self.zero)
    }
}

impl<T: Coefficient> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_zero(other);
        self.coeffs == other.coeffs
    }
}

impl<T: Coefficient + Eq> Eq for Polynomial<T> {}

impl<T: Coefficient + Hash> Hash for Polynomial<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zero.hash(state);
        self.coeffs.hash(state);
    }
}

/* ---- Arithmetic operators ---- */

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        let coeffs = self.coeffs.iter().map(|c| -c.clone()).collect();
        Polynomial::new(coeffs, self.zero.clone())
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Coefficient> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Polynomial<T> {
        self.assert_same_zero(rhs);
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self[i].clone() + rhs[i].clone()).collect();
        Polynomial::new(coeffs, self.zero.clone())
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Coefficient> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: Self) -> Polynomial<T> {
        self.assert_same_zero(rhs);
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| self[i].clone() - rhs[i].clone()).collect();
        Polynomial::new(coeffs, self.zero.clone())
    }
}

impl<T: Coefficient> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Coefficient> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Polynomial multiplication using naive O(n*m) convolution.
    fn mul(self, rhs: Self) -> Polynomial<T> {
        self.assert_same_zero(rhs);
        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![self.zero.clone(); n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].clone() + a.clone() * b.clone();
            }
        }

        Polynomial::new(coeffs, self.zero.clone())
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

/// Quotient of Euclidean division.
///
/// # Panics
///
/// Panics on division by the zero polynomial; see [`Polynomial::div_rem`].
impl<T: Coefficient> Div for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn div(self, rhs: Self) -> Polynomial<T> {
        match self.div_rem(rhs) {
            Ok((q, _)) => q,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Coefficient> Div for Polynomial<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

/// Remainder of Euclidean division.
///
/// # Panics
///
/// Panics on division by the zero polynomial; see [`Polynomial::rem`].
impl<T: Coefficient> Rem for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn rem(self, rhs: Self) -> Polynomial<T> {
        match self.div_rem(rhs) {
            Ok((_, r)) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: Coefficient> Rem for Polynomial<T> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        &self % &rhs
    }
}

impl<T: fmt::Debug> fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs).finish()
    }
}

impl<T: Coefficient + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "{}", self.zero);
        }

        let mut first = true;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if *coeff == self.zero {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 => write!(f, "{}*x", coeff)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Polynomial<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Polynomial", 2)?;
        state.serialize_field("coeffs", &self.coeffs)?;
        state.serialize_field("zero", &self.zero)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Polynomial<T>
where
    T: Coefficient + SameDomain + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            coeffs: Vec<T>,
            zero: T,
        }

        let raw = <Raw<T> as serde::Deserialize>::deserialize(deserializer)?;
        // Canonicalization compares coefficients with the zero value, which
        // must not run on mixed domains.
        if !raw.coeffs.iter().all(|c| c.same_domain(&raw.zero)) {
            return Err(serde::de::Error::custom(
                "polynomial coefficients and zero value belong to different domains",
            ));
        }
        Ok(Self::new(raw.coeffs, raw.zero))
    }
}
