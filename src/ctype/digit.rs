use std::error;
use std::fmt;

use super::{is_digit, is_hex_digit};

#[derive(Debug, PartialEq)]
pub enum ConversionError {
    NotDigit(i32),
    NotHexDigit(i32),
    Overflow { value: i32, multiplier: i32 },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::NotDigit(c) => {
                write!(f, "decimal digit expected, got code {:#x}", c)
            }
            ConversionError::NotHexDigit(c) => {
                write!(f, "hexdecimal digit expected, got code {:#x}", c)
            }
            ConversionError::Overflow { value, multiplier } => {
                write!(f, "digit value {} times {} overflows", value, multiplier)
            }
        }
    }
}

impl error::Error for ConversionError {}

/// Converts '0' ..= '9' into 0 ..= 9.
///
/// The caller must check `is_digit(c)` first. Any other code yields an
/// unspecified value; it is neither clamped nor reported, and it never
/// panics. Use `try_digit_value` when the input is not known to be a digit.
#[inline]
pub const fn digit_value(c: i32) -> i32 {
    c.wrapping_sub(b'0' as i32)
}

/// `digit_value(c) * m`, for accumulating positional numbers without
/// parsing a whole string:
///
/// ```
/// use rascii::{digit_value, digit_value_scaled};
///
/// let ys = b"2014";
/// let y = digit_value_scaled(ys[0] as i32, 1000)
///     + digit_value_scaled(ys[1] as i32, 100)
///     + digit_value_scaled(ys[2] as i32, 10)
///     + digit_value(ys[3] as i32);
/// assert_eq!(y, 2014);
/// ```
///
/// Same precondition as `digit_value`. The product wraps on overflow.
#[inline]
pub const fn digit_value_scaled(c: i32, m: i32) -> i32 {
    digit_value(c).wrapping_mul(m)
}

/// Converts a hexdecimal digit into 0 ..= 15, accepting both 'a' ..= 'f'
/// and 'A' ..= 'F'.
///
/// The caller must check `is_hex_digit(c)` first. Codes outside the
/// letter ranges fall through to `digit_value` and share its contract.
#[inline]
pub const fn hex_digit_value(c: i32) -> i32 {
    if c >= b'a' as i32 && c <= b'f' as i32 {
        c - b'a' as i32 + 10
    } else if c >= b'A' as i32 && c <= b'F' as i32 {
        c - b'A' as i32 + 10
    } else {
        digit_value(c)
    }
}

/// `hex_digit_value(c) * m`. The product wraps on overflow.
#[inline]
pub const fn hex_digit_value_scaled(c: i32, m: i32) -> i32 {
    hex_digit_value(c).wrapping_mul(m)
}

/// Checked `digit_value`
pub fn try_digit_value(c: i32) -> Result<i32, ConversionError> {
    if is_digit(c) {
        Ok(digit_value(c))
    } else {
        Err(ConversionError::NotDigit(c))
    }
}

/// Checked `digit_value_scaled`
pub fn try_digit_value_scaled(c: i32, m: i32) -> Result<i32, ConversionError> {
    scale(try_digit_value(c)?, m)
}

/// Checked `hex_digit_value`
pub fn try_hex_digit_value(c: i32) -> Result<i32, ConversionError> {
    if is_hex_digit(c) {
        Ok(hex_digit_value(c))
    } else {
        Err(ConversionError::NotHexDigit(c))
    }
}

/// Checked `hex_digit_value_scaled`
pub fn try_hex_digit_value_scaled(c: i32, m: i32) -> Result<i32, ConversionError> {
    scale(try_hex_digit_value(c)?, m)
}

fn scale(value: i32, multiplier: i32) -> Result<i32, ConversionError> {
    value
        .checked_mul(multiplier)
        .ok_or(ConversionError::Overflow { value, multiplier })
}
