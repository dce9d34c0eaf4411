use super::{is_lower, is_upper};

/// Distance between a lower-case letter and its upper-case counterpart.
pub const CASE_DELTA: i32 = (b'z' - b'Z') as i32;

/// Maps 'A' ..= 'Z' to 'a' ..= 'z'. Every other code is returned as is.
#[inline]
pub const fn to_lower(c: i32) -> i32 {
    if is_upper(c) {
        c + CASE_DELTA
    } else {
        c
    }
}

/// Maps 'a' ..= 'z' to 'A' ..= 'Z'. Every other code is returned as is.
#[inline]
pub const fn to_upper(c: i32) -> i32 {
    if is_lower(c) {
        c - CASE_DELTA
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctype::is_alpha;

    #[test]
    fn case_delta() {
        assert_eq!(CASE_DELTA, 32);
    }

    #[test]
    fn letters() {
        assert_eq!(to_lower(b'A' as i32), b'a' as i32);
        assert_eq!(to_lower(b'Z' as i32), b'z' as i32);
        assert_eq!(to_lower(b'q' as i32), b'q' as i32);
        assert_eq!(to_upper(b'a' as i32), b'A' as i32);
        assert_eq!(to_upper(b'z' as i32), b'Z' as i32);
        assert_eq!(to_upper(b'Q' as i32), b'Q' as i32);
    }

    #[test]
    fn identity_on_non_letters() {
        for c in (-300..=300).filter(|&c| !is_alpha(c)) {
            assert_eq!(to_lower(c), c);
            assert_eq!(to_upper(c), c);
        }
        // The neighbours of both letter ranges.
        for &c in b"@[`{".iter() {
            assert_eq!(to_lower(c as i32), c as i32);
            assert_eq!(to_upper(c as i32), c as i32);
        }
        assert_eq!(to_lower(i32::MIN), i32::MIN);
        assert_eq!(to_upper(i32::MAX), i32::MAX);
    }

    #[test]
    fn round_trip() {
        for c in (0..=0x7f).filter(|&c| is_alpha(c)) {
            assert_eq!(to_lower(to_upper(c)), to_lower(c));
            assert_eq!(to_upper(to_lower(c)), to_upper(c));
            assert_eq!(to_lower(to_lower(c)), to_lower(c));
            assert_eq!(to_upper(to_upper(c)), to_upper(c));
        }
    }

    #[test]
    fn const_evaluation() {
        const LOWER_G: i32 = to_lower(b'G' as i32);
        const UPPER_G: i32 = to_upper(b'g' as i32);
        assert_eq!(LOWER_G, b'g' as i32);
        assert_eq!(UPPER_G, b'G' as i32);
    }
}
