//! Binary fields GF(2^n) with a byte codec.
//!
//! The codec maps up to four bytes to an element and back. The bytes are a
//! big-endian integer whose bit `i` is the coefficient of `x^i`, so the
//! encoding does not depend on the host's byte order.

use core::fmt;
use core::ops::Deref;

use log::{debug, trace};

use crate::error::{FieldError, FieldResult};
use crate::structures::gf::{FieldElement, FiniteField};
use crate::structures::modint::ModInt;
use crate::structures::poly::Polynomial;

/// Largest input the byte codec accepts.
const MAX_CODEC_BYTES: usize = 4;

/// Irreducible polynomial for GF(2^n) as a bitmask (bit `i` is the
/// coefficient of `x^i`), for the degrees with a well-known choice.
///
/// Degree 8 is the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
///
/// # Example
///
/// ```
/// use finfield::standard_polynomial;
///
/// assert_eq!(standard_polynomial(8), Some(0x11B));
/// assert_eq!(standard_polynomial(9), None);
/// ```
pub const fn standard_polynomial(n: usize) -> Option<u64> {
    match n {
        1 => Some(0b11),
        2 => Some(0b111),
        3 => Some(0b1011),
        4 => Some(0b1_0011),
        5 => Some(0b10_0101),
        6 => Some(0b100_0011),
        7 => Some(0b1000_0011),
        8 => Some(0x11B),
        16 => Some(0x1_002B),
        24 => Some(0x100_001B),
        32 => Some(0x1_0000_008D),
        _ => None,
    }
}

/// The finite field GF(2^n).
///
/// Dereferences to the underlying [`FiniteField`], so every field operation
/// is available directly.
///
/// # Example
///
/// ```
/// use finfield::{BinaryFiniteField, Field};
///
/// let aes = BinaryFiniteField::standard(8).unwrap();
/// let a = aes.element_from_bytes(&[0x53]).unwrap();
/// let inv = a.inverse().unwrap();
/// assert_eq!(aes.bytes_from_element(&inv).unwrap(), [0, 0, 0, 0xCA]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryFiniteField {
    field: FiniteField,
}

impl BinaryFiniteField {
    /// Create GF(2^n) from the coefficients of the irreducible polynomial,
    /// lowest degree first.
    ///
    /// # Errors
    ///
    /// Fails as [`FiniteField::new`] does with `p = 2`.
    pub fn new(n: usize, irreducible: &[i64]) -> FieldResult<Self> {
        FiniteField::new(2, n, irreducible).map(Self::wrap)
    }

    /// Create GF(2^n) from an irreducible polynomial over GF(2).
    ///
    /// # Errors
    ///
    /// Fails as [`FiniteField::with_polynomial`] does with `p = 2`.
    pub fn with_polynomial(n: usize, irreducible: Polynomial<ModInt>) -> FieldResult<Self> {
        FiniteField::with_polynomial(2, n, irreducible).map(Self::wrap)
    }

    /// Create GF(2^n) with the polynomial from [`standard_polynomial`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::WrongDegree`] if no polynomial is tabulated for
    /// `n`.
    pub fn standard(n: usize) -> FieldResult<Self> {
        let Some(mask) = standard_polynomial(n) else {
            debug!("no standard polynomial of degree {}", n);
            return Err(FieldError::WrongDegree {
                expected: n,
                got: 0,
            });
        };
        let coeffs: Vec<i64> = (0..=n).map(|i| ((mask >> i) & 1) as i64).collect();
        Self::new(n, &coeffs)
    }

    fn wrap(field: FiniteField) -> Self {
        debug!("using {} as a binary field", field);
        Self { field }
    }

    /// The underlying field.
    pub fn field(&self) -> &FiniteField {
        &self.field
    }

    /// Build the element whose coefficient of `x^i` is bit `i` of `bits`.
    ///
    /// Bits at or above `n` are kept; the element is not reduced.
    pub fn element_from_bits(&self, bits: u32) -> FieldElement<'_> {
        let coeffs: Vec<i64> = (0..u32::BITS).map(|i| i64::from((bits >> i) & 1)).collect();
        self.field.element(&coeffs)
    }

    /// Pack the coefficients of an element into a `u32`, bit `i` holding the
    /// coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ElementTooWide`] if the element has degree 32 or
    /// more.
    ///
    /// # Panics
    ///
    /// Panics if the element belongs to a different field.
    pub fn bits_from_element(&self, element: &FieldElement<'_>) -> FieldResult<u32> {
        assert!(
            element.field() == &self.field,
            "elements are from different fields"
        );
        let poly = element.polynomial();
        if poly.degree() >= u32::BITS as usize {
            return Err(FieldError::ElementTooWide {
                degree: poly.degree(),
            });
        }

        Ok(poly
            .coefficients()
            .iter()
            .enumerate()
            .fold(0u32, |bits, (i, c)| bits | (c.value() << i)))
    }

    /// Decode up to four big-endian bytes into an element.
    ///
    /// The bytes are zero-padded on the high-order side to four bytes and read
    /// as a `u32`; bit `i` becomes the coefficient of `x^i`.
    ///
    /// # Errors
    ///
    /// - [`FieldError::TooManyBytes`] if more than four bytes are given.
    /// - [`FieldError::NotByteAligned`] if `n` is not a multiple of 8.
    /// - [`FieldError::TooManyBytes`] if more than `n / 8` bytes are given.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::BinaryFiniteField;
    ///
    /// let field = BinaryFiniteField::standard(16).unwrap();
    /// let e = field.element_from_bytes(&[0x01, 0x02]).unwrap();
    /// // 0x0102 has bits 1 and 8 set
    /// assert_eq!(e, field.element(&[0, 1, 0, 0, 0, 0, 0, 0, 1]));
    /// ```
    pub fn element_from_bytes(&self, bytes: &[u8]) -> FieldResult<FieldElement<'_>> {
        let n = self.field.n();
        trace!("decoding {} bytes into GF(2^{})", bytes.len(), n);

        if bytes.len() > MAX_CODEC_BYTES {
            return Err(FieldError::TooManyBytes {
                len: bytes.len(),
                n,
            });
        }
        if n % 8 != 0 {
            return Err(FieldError::NotByteAligned { n });
        }
        if bytes.len() > n / 8 {
            return Err(FieldError::TooManyBytes {
                len: bytes.len(),
                n,
            });
        }

        let mut buf = [0u8; MAX_CODEC_BYTES];
        buf[MAX_CODEC_BYTES - bytes.len()..].copy_from_slice(bytes);
        let bits = u32::from_be_bytes(buf);
        trace!("decoded bits {:#034b}", bits);

        Ok(self.element_from_bits(bits))
    }

    /// Encode an element as four big-endian bytes.
    ///
    /// The output is always four bytes wide, while
    /// [`BinaryFiniteField::element_from_bytes`] accepts at most `n / 8`.
    /// For a reduced element the low `n / 8` bytes decode back to it; the
    /// full output only decodes when `n == 32`.
    ///
    /// # Example
    ///
    /// ```
    /// use finfield::BinaryFiniteField;
    ///
    /// let field = BinaryFiniteField::standard(16).unwrap();
    /// let e = field.element_from_bits(0x1234);
    /// let bytes = field.bytes_from_element(&e).unwrap();
    /// assert_eq!(bytes, [0, 0, 0x12, 0x34]);
    /// assert_eq!(field.element_from_bytes(&bytes[4 - 16 / 8..]).unwrap(), e);
    /// assert!(field.element_from_bytes(&bytes).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`FieldError::NotByteAligned`] if `n` is not a multiple of 8.
    /// - [`FieldError::ElementTooWide`] if the element has degree 32 or more.
    pub fn bytes_from_element(&self, element: &FieldElement<'_>) -> FieldResult<[u8; 4]> {
        let n = self.field.n();
        if n % 8 != 0 {
            return Err(FieldError::NotByteAligned { n });
        }

        let bits = self.bits_from_element(element)?;
        trace!("encoding bits {:#034b} from GF(2^{})", bits, n);
        Ok(bits.to_be_bytes())
    }
}

impl Deref for BinaryFiniteField {
    type Target = FiniteField;

    fn deref(&self) -> &FiniteField {
        &self.field
    }
}

impl TryFrom<FiniteField> for BinaryFiniteField {
    type Error = FieldError;

    fn try_from(field: FiniteField) -> FieldResult<Self> {
        if field.p() != 2 {
            return Err(FieldError::WrongCharacteristic {
                expected: 2,
                got: field.p(),
            });
        }
        Ok(Self::wrap(field))
    }
}

impl From<BinaryFiniteField> for FiniteField {
    fn from(binary: BinaryFiniteField) -> Self {
        binary.field
    }
}

impl fmt::Display for BinaryFiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.field, f)
    }
}
