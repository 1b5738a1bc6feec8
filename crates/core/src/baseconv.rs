//! Arbitrary-base integer conversion
//!
//! Pure functions for converting digit strings between radices 2 through 64
//! using exact arbitrary-precision arithmetic. The digit alphabet is
//! case-insensitive for radices up to 36 and case-sensitive above, with
//! lowercase values preceding uppercase values.

use serde::{Deserialize, Serialize};

/// Canonical digit alphabet: 0-9, a-z, A-Z, then '+' and '/'.
///
/// A symbol's position is its numeric value. For radix R only the first R
/// symbols are valid digits.
const ALPHABET: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ+/";

/// Smallest supported radix
pub const MIN_BASE: u32 = 2;

/// Largest supported radix
pub const MAX_BASE: u32 = 64;

/// Error type for base conversion operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum BaseConvertError {
    /// A character of the input is not a valid digit for the source radix.
    /// The message format is part of the public contract.
    #[error("Invalid digit \"{digit}\" for base {base}.")]
    InvalidDigit { digit: char, base: u32 },

    #[error("Base {0} is out of range. Supported bases go from 2 to 64.")]
    UnsupportedBase(u32),

    #[error("Value must not be empty.")]
    EmptyValue,
}

/// Convert a digit string from one radix to another
///
/// Accumulates `value` most-significant-digit-first into an unbounded integer,
/// then re-emits it in `to_base` by repeated division. Precision does not
/// degrade for inputs beyond the 64-bit range.
///
/// For `from_base` up to 36 digit lookup is case-insensitive; above 36 it is
/// case-sensitive, with lowercase letters valued 10-35, uppercase 36-61, and
/// (for base 64) '+' and '/' as 62 and 63.
///
/// # Errors
///
/// - [`BaseConvertError::UnsupportedBase`] if either radix is outside 2..=64
/// - [`BaseConvertError::EmptyValue`] if `value` is empty
/// - [`BaseConvertError::InvalidDigit`] if a character of `value` is not a
///   valid digit under `from_base`
pub fn convert_base(value: &str, from_base: u32, to_base: u32) -> Result<String, BaseConvertError> {
    for base in [from_base, to_base] {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(BaseConvertError::UnsupportedBase(base));
        }
    }

    if value.is_empty() {
        return Err(BaseConvertError::EmptyValue);
    }

    // acc = acc * from_base + digit, over u32 limbs
    let mut limbs: Vec<u32> = Vec::new();
    for c in value.chars() {
        let digit = digit_value(c, from_base).ok_or(BaseConvertError::InvalidDigit {
            digit: c,
            base: from_base,
        })?;
        mul_add(&mut limbs, from_base, digit);
    }

    // Zero accumulates to no limbs at all
    if limbs.is_empty() {
        return Ok("0".to_string());
    }

    let mut digits: Vec<char> = Vec::new();
    while !limbs.is_empty() {
        let remainder = div_rem(&mut limbs, to_base);
        digits.push(ALPHABET[remainder as usize] as char);
    }

    Ok(digits.iter().rev().collect())
}

/// Numeric value of a digit character under the given radix
///
/// Returns `None` when the character is not a valid digit for `base`.
fn digit_value(c: char, base: u32) -> Option<u32> {
    let value = if base <= 36 {
        let folded = c.to_ascii_lowercase();
        ALPHABET[..36].iter().position(|&b| b as char == folded)?
    } else {
        ALPHABET.iter().position(|&b| b as char == c)?
    } as u32;

    (value < base).then_some(value)
}

/// Multiply the little-endian limb vector by `factor` and add `addend`, in place
fn mul_add(limbs: &mut Vec<u32>, factor: u32, addend: u32) {
    let mut carry = addend as u64;
    for limb in limbs.iter_mut() {
        let wide = *limb as u64 * factor as u64 + carry;
        *limb = wide as u32;
        carry = wide >> 32;
    }
    while carry > 0 {
        limbs.push(carry as u32);
        carry >>= 32;
    }
}

/// Divide the little-endian limb vector by `divisor` in place, returning the remainder
///
/// Trailing zero limbs are trimmed so an exhausted value becomes the empty vector.
fn div_rem(limbs: &mut Vec<u32>, divisor: u32) -> u32 {
    let mut remainder = 0u64;
    for limb in limbs.iter_mut().rev() {
        let wide = (remainder << 32) | *limb as u64;
        *limb = (wide / divisor as u64) as u32;
        remainder = wide % divisor as u64;
    }
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
    remainder as u32
}
