pub mod algebra;
pub mod config;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::coefficient::{Coefficient, SameDomain};
pub use algebra::field::Field;

pub use config::FieldConfig;
pub use error::{ErrorKind, FieldError, FieldResult};

pub use structures::binary::{standard_polynomial, BinaryFiniteField};
pub use structures::gf::{FieldElement, FiniteField};
pub use structures::modint::ModInt;
pub use structures::poly::Polynomial;
pub use utils::{extended_gcd, is_prime};
