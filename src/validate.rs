use crate::alphabet::{HEX_TABLE, INVALID};

/// Whether `s` is a syntactically valid hex string.
///
/// A valid hex string is non-empty and made only of `0-9`, `a-f` and `A-F`.
/// Odd lengths are accepted. This checks syntax only.
#[inline]
pub fn is_valid_hex_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| HEX_TABLE[b as usize] != INVALID)
}

/// Hex syntax check as a method on strings.
pub trait HexStr {
    fn is_valid_hex_string(&self) -> bool;
}

impl HexStr for str {
    #[inline]
    fn is_valid_hex_string(&self) -> bool { is_valid_hex_string(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hex() {
        assert!("1a2b3c4d5e6f".is_valid_hex_string());
        assert!("1A2B3C4D5E6F".is_valid_hex_string());
        assert!("1A2b3C4d5E6f".is_valid_hex_string());
        assert!("A1B2C3D4E5F6".is_valid_hex_string());
        assert!("abcdef".is_valid_hex_string());
        // odd length is still valid syntax
        assert!("1a2b3c4d5e6".is_valid_hex_string());
        assert!("0".is_valid_hex_string());
    }

    #[test]
    fn test_invalid_hex() {
        assert!(!is_valid_hex_string(""));
        assert!(!is_valid_hex_string("NOT_A_HEX"));
        assert!(!is_valid_hex_string("1a2b3c4d5e6z"));
        assert!(!is_valid_hex_string("1z2y3x"));
        assert!(!is_valid_hex_string("0x1a"));
        assert!(!is_valid_hex_string("1a 2b"));
        assert!(!is_valid_hex_string("1a\n"));
    }

    #[test]
    fn test_multibyte_chars_rejected() {
        assert!(!is_valid_hex_string("ab\u{e9}"));
        assert!(!is_valid_hex_string("\u{ff21}\u{ff22}"));
        assert!(!is_valid_hex_string("\u{1f600}"));
    }
}
