//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Broad family a [`FieldError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An invalid argument or configuration (degree mismatch, codec limits).
    Argument,
    /// An arithmetic impossibility (non-prime characteristic, non-invertible residue).
    Arithmetic,
    /// Division by the additive identity.
    DivisionByZero,
}

/// Errors raised by field construction, inversion, division and the byte codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The characteristic is not a prime number.
    #[error("finite fields contain p^n elements with p prime; {p} is not prime")]
    NotPrime { p: u64 },

    /// The irreducible polynomial does not have degree `n` (or `n` is zero).
    #[error("degree of the irreducible polynomial is {got}, expected n = {expected}")]
    WrongDegree { expected: usize, got: usize },

    /// A polynomial or configuration uses a different characteristic.
    #[error("expected coefficients modulo {expected}, got modulo {got}")]
    WrongCharacteristic { expected: u32, got: u32 },

    /// `p^n` does not fit into 64 bits.
    #[error("field order {p}^{n} does not fit into 64 bits")]
    OrderOverflow { p: u32, n: usize },

    /// The residue shares a factor with its modulus.
    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: u32, modulus: u32 },

    /// Division by (or inversion of) zero.
    #[error("attempted to divide by zero")]
    DivisionByZero,

    /// The byte codec needs `n` to be a multiple of 8.
    #[error("n = {n} is not a multiple of 8")]
    NotByteAligned { n: usize },

    /// More bytes than the codec (4) or the field (`n / 8`) can hold.
    #[error("{len} bytes do not fit into a field with n = {n}")]
    TooManyBytes { len: usize, n: usize },

    /// The element has coefficients beyond bit 31.
    #[error("element of degree {degree} does not fit into 32 bits")]
    ElementTooWide { degree: usize },
}

impl FieldError {
    /// The failure family of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::NotPrime { .. } | FieldError::NotInvertible { .. } => ErrorKind::Arithmetic,
            FieldError::DivisionByZero => ErrorKind::DivisionByZero,
            FieldError::WrongDegree { .. }
            | FieldError::WrongCharacteristic { .. }
            | FieldError::OrderOverflow { .. }
            | FieldError::NotByteAligned { .. }
            | FieldError::TooManyBytes { .. }
            | FieldError::ElementTooWide { .. } => ErrorKind::Argument,
        }
    }
}

/// Result alias used throughout the crate.
pub type FieldResult<T> = Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(FieldError::NotPrime { p: 9 }.kind(), ErrorKind::Arithmetic);
        assert_eq!(
            FieldError::NotInvertible { value: 2, modulus: 4 }.kind(),
            ErrorKind::Arithmetic
        );
        assert_eq!(FieldError::DivisionByZero.kind(), ErrorKind::DivisionByZero);
        assert_eq!(
            FieldError::WrongDegree { expected: 8, got: 7 }.kind(),
            ErrorKind::Argument
        );
        assert_eq!(FieldError::NotByteAligned { n: 4 }.kind(), ErrorKind::Argument);
    }

    #[test]
    fn messages() {
        assert_eq!(
            FieldError::NotPrime { p: 9 }.to_string(),
            "finite fields contain p^n elements with p prime; 9 is not prime"
        );
        assert_eq!(
            FieldError::NotInvertible { value: 2, modulus: 4 }.to_string(),
            "2 has no inverse modulo 4"
        );
        assert_eq!(
            FieldError::TooManyBytes { len: 2, n: 8 }.to_string(),
            "2 bytes do not fit into a field with n = 8"
        );
    }
}
