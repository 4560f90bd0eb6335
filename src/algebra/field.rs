use core::ops::Mul;

use crate::error::FieldResult;

/// A type whose non-zero elements have multiplicative inverses.
///
/// Implemented by [`ModInt`](crate::ModInt) (inverse through the extended
/// Euclidean algorithm) and [`FieldElement`](crate::FieldElement) (inverse
/// through exponentiation).
pub trait Field: Sized + Clone + Mul<Output = Self> {
    /// Multiplicative inverse `a⁻¹`.
    ///
    /// Fails with [`FieldError::DivisionByZero`](crate::FieldError::DivisionByZero)
    /// for zero, or [`FieldError::NotInvertible`](crate::FieldError::NotInvertible)
    /// for a residue sharing a factor with its modulus.
    fn inverse(&self) -> FieldResult<Self>;

    /// Fallible division `self · rhs⁻¹`.
    #[inline]
    fn try_div(&self, rhs: &Self) -> FieldResult<Self> {
        Ok(self.clone() * rhs.inverse()?)
    }
}
