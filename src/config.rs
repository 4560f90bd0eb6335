//! Plain-data field descriptions.
//!
//! A [`FieldConfig`] holds the parameters of a field so they can be stored,
//! sent or loaded (with the `serde` feature) before the field is validated
//! and built.

use crate::error::{FieldError, FieldResult};
use crate::structures::binary::BinaryFiniteField;
use crate::structures::gf::FiniteField;

/// Parameters of GF(p^n): the characteristic, the extension degree and the
/// irreducible polynomial's coefficients, lowest degree first.
///
/// # Example
///
/// ```
/// use finfield::FieldConfig;
///
/// let config = FieldConfig::binary(8, vec![1, 1, 0, 1, 1, 0, 0, 0, 1]);
/// let field = config.build_binary().unwrap();
/// assert_eq!(field.order(), 256);
/// assert_eq!(FieldConfig::from(field.field()), config);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    pub p: u32,
    pub n: usize,
    pub irreducible: Vec<i64>,
}

impl FieldConfig {
    pub fn new(p: u32, n: usize, irreducible: Vec<i64>) -> Self {
        Self { p, n, irreducible }
    }

    /// Parameters of GF(2^n).
    pub fn binary(n: usize, irreducible: Vec<i64>) -> Self {
        Self::new(2, n, irreducible)
    }

    /// Validate the parameters and build the field.
    ///
    /// # Errors
    ///
    /// Fails as [`FiniteField::new`] does.
    pub fn build(&self) -> FieldResult<FiniteField> {
        FiniteField::new(self.p, self.n, &self.irreducible)
    }

    /// Validate the parameters and build a binary field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::WrongCharacteristic`] if `p` is not 2, and fails
    /// as [`BinaryFiniteField::new`] otherwise.
    pub fn build_binary(&self) -> FieldResult<BinaryFiniteField> {
        if self.p != 2 {
            return Err(FieldError::WrongCharacteristic {
                expected: 2,
                got: self.p,
            });
        }
        BinaryFiniteField::new(self.n, &self.irreducible)
    }
}

impl From<&FiniteField> for FieldConfig {
    fn from(field: &FiniteField) -> Self {
        let irreducible = field
            .irreducible()
            .coefficients()
            .iter()
            .map(|c| i64::from(c.value()))
            .collect();
        Self::new(field.p(), field.n(), irreducible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_prime_power_field() {
        let field = FieldConfig::new(3, 3, vec![1, 2, 0, 1]).build().unwrap();
        assert_eq!(field.order(), 27);
    }

    #[test]
    fn build_propagates_validation() {
        assert_eq!(
            FieldConfig::new(9, 2, vec![1, 0, 1]).build().unwrap_err(),
            FieldError::NotPrime { p: 9 }
        );
    }

    #[test]
    fn build_binary_requires_two() {
        assert_eq!(
            FieldConfig::new(3, 2, vec![1, 0, 1]).build_binary().unwrap_err(),
            FieldError::WrongCharacteristic {
                expected: 2,
                got: 3
            }
        );
    }

    #[test]
    fn from_field_normalizes_coefficients() {
        let field = FieldConfig::new(5, 2, vec![-3, 5, 6]).build().unwrap();
        assert_eq!(FieldConfig::from(&field), FieldConfig::new(5, 2, vec![2, 0, 1]));
    }

    #[test]
    fn round_trip_through_field() {
        let config = FieldConfig::binary(4, vec![1, 1, 0, 0, 1]);
        let field = config.build_binary().unwrap();
        assert_eq!(FieldConfig::from(field.field()).build_binary().unwrap(), field);
    }
}
