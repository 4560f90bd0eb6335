use core::ops::{Add, Div, Mul, Neg, Sub};

/// Capabilities a polynomial coefficient must provide.
///
/// Blanket-implemented for every type with equality and the five arithmetic
/// operators, so both [`ModInt`](crate::ModInt) and plain integers qualify.
///
/// Polynomial long division relies on `Div`. That is only sound when the
/// coefficient type is a field: for `i64` the division truncates, and
/// quotients and remainders are exact only when every leading-coefficient
/// division happens to be exact (e.g. a monic divisor). Integer coefficients
/// are supported for convenience, not for field correctness.
pub trait Coefficient:
    Clone
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
}

impl<T> Coefficient for T where
    T: Clone
        + PartialEq
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
{
}

/// Values that may live in distinct runtime domains, such as residues taken
/// modulo different numbers.
///
/// Comparing values from different domains is a programming error for types
/// like [`ModInt`](crate::ModInt), so untrusted data is checked with this
/// before any arithmetic or equality runs on it.
pub trait SameDomain {
    /// Whether `self` and `other` can be compared and combined.
    fn same_domain(&self, other: &Self) -> bool;
}

macro_rules! impl_same_domain_always {
    ($($t:ty),*) => {
        $(
            impl SameDomain for $t {
                #[inline]
                fn same_domain(&self, _other: &Self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_same_domain_always!(i8, i16, i32, i64, i128, isize, f32, f64);
