use super::{CARRIAGE_RETURN, DELETE, SPACE, TAB};

/// Tests `lo <= c <= hi`. Both bounds are inclusive.
#[inline]
const fn in_range(c: i32, lo: u8, hi: u8) -> bool {
    c >= lo as i32 && c <= hi as i32
}

/// '0' ..= '9'
#[inline]
pub const fn is_digit(c: i32) -> bool {
    in_range(c, b'0', b'9')
}

/// A decimal digit, or a letter in 'A' ..= 'F' or 'a' ..= 'f'
#[inline]
pub const fn is_hex_digit(c: i32) -> bool {
    is_digit(c) || in_range(c, b'A', b'F') || in_range(c, b'a', b'f')
}

/// 'a' ..= 'z'
#[inline]
pub const fn is_lower(c: i32) -> bool {
    in_range(c, b'a', b'z')
}

/// 'A' ..= 'Z'
#[inline]
pub const fn is_upper(c: i32) -> bool {
    in_range(c, b'A', b'Z')
}

#[inline]
pub const fn is_alpha(c: i32) -> bool {
    is_lower(c) || is_upper(c)
}

#[inline]
pub const fn is_alphanumeric(c: i32) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Graphic characters that are neither letters nor digits.
///
/// They fall into four disjoint bands of the ASCII table:
///
/// - `!"#$%&'()*+,-./`
/// - `;<=>?@`
/// - ``[\]^_` ``
/// - `{|}~`
///
/// Note that ':' sits between '9' and ';' and is not one of them.
#[inline]
pub const fn is_punctuation(c: i32) -> bool {
    in_range(c, b'!', b'/')
        || in_range(c, b';', b'@')
        || in_range(c, b'[', b'`')
        || in_range(c, b'{', b'~')
}

/// Any visible character, '!' ..= '~'
#[inline]
pub const fn is_graphic(c: i32) -> bool {
    in_range(c, b'!', b'~')
}

/// Space or horizontal tab
#[inline]
pub const fn is_blank(c: i32) -> bool {
    c == TAB || c == SPACE
}

/// Space, or anything from horizontal tab to carriage return (`\t`, `\n`,
/// `\v`, `\f` and `\r`).
#[inline]
pub const fn is_space(c: i32) -> bool {
    c == SPACE || (c >= TAB && c <= CARRIAGE_RETURN)
}

/// A graphic character or space, ' ' ..= '~'
#[inline]
pub const fn is_printable(c: i32) -> bool {
    in_range(c, b' ', b'~')
}

/// 0x00 ..= 0x1f, plus DEL
#[inline]
pub const fn is_control(c: i32) -> bool {
    c == DELETE || (c >= 0 && c <= 0x1f)
}

/// True if no bit outside the low seven is set. Negative codes carry the
/// sign bit and are never 7-bit clean.
#[inline]
pub const fn is_ascii_7bit(c: i32) -> bool {
    c & !0x7f == 0
}
