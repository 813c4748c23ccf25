use crate::{
    alphabet::{hex_to_byte, is_hex_char, nibble},
    validate::is_valid_hex_string,
};

/// Decode a hex string into bytes.
///
/// Digits are consumed left to right in pairs. When the string has an odd
/// number of digits, the last one becomes a byte on its own with value 0-15,
/// so `"1a2b3c4d5e6"` decodes to `[0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x06]`.
/// Re-encoding such a result yields `"...06"`, not the original string.
///
/// Returns `None` for an empty string or any character outside
/// `0-9A-Fa-f`. Nothing is returned partially.
pub fn bytes_from_hex_string(s: &str) -> Option<Vec<u8>> {
    if !is_valid_hex_string(s) {
        log_rejected(s);
        return None;
    }

    let digits = s.as_bytes();
    let mut bytes = Vec::with_capacity(digits.len().div_ceil(2));

    for chunk in digits.chunks(2) {
        let byte = match *chunk {
            [hi, lo] => hex_to_byte(hi, lo)?,
            [single] => nibble(single)?,
            _ => return None,
        };
        bytes.push(byte);
    }

    if bytes.is_empty() {
        return None;
    }

    Some(bytes)
}

#[cold]
fn log_rejected(s: &str) {
    match s.char_indices().find(|&(_, c)| !is_hex_char(c)) {
        Some((position, c)) => {
            debug!("rejected hex string: invalid character {c:?} at byte {position}")
        }
        None => debug!("rejected hex string: empty input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [u8; 6] = [0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f];

    #[test]
    fn test_decode_lowercase() {
        assert_eq!(bytes_from_hex_string("1a2b3c4d5e6f").as_deref(), Some(&EXPECTED[..]));
    }

    #[test]
    fn test_decode_ignores_case() {
        assert_eq!(bytes_from_hex_string("1A2B3C4D5E6F").as_deref(), Some(&EXPECTED[..]));
        assert_eq!(bytes_from_hex_string("1A2b3C4d5E6f").as_deref(), Some(&EXPECTED[..]));
    }

    #[test]
    fn test_decode_letter_before_number() {
        assert_eq!(
            bytes_from_hex_string("A1B2C3D4E5F6"),
            Some(vec![0xa1, 0xb2, 0xc3, 0xd4, 0xe5, 0xf6])
        );
    }

    #[test]
    fn test_decode_letters_only() {
        assert_eq!(bytes_from_hex_string("abcdef"), Some(vec![0xab, 0xcd, 0xef]));
    }

    #[test]
    fn test_decode_odd_length() {
        assert_eq!(
            bytes_from_hex_string("1a2b3c4d5e6"),
            Some(vec![0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x06])
        );
        assert_eq!(bytes_from_hex_string("f"), Some(vec![0x0f]));
        assert_eq!(bytes_from_hex_string("abc"), Some(vec![0xab, 0x0c]));
    }

    #[test]
    fn test_decode_failures() {
        assert_eq!(bytes_from_hex_string(""), None);
        assert_eq!(bytes_from_hex_string("NOT_A_HEX"), None);
        assert_eq!(bytes_from_hex_string("1z2y3x"), None);
        assert_eq!(bytes_from_hex_string("1a2b3c4d5e6z"), None);
        assert_eq!(bytes_from_hex_string("ab\u{e9}"), None);
    }

    #[test]
    fn test_decode_matches_hex_crate() {
        for input in ["00", "ff", "0123456789abcdef", "DEADBEEF", "a1B2c3D4"] {
            assert_eq!(bytes_from_hex_string(input), Some(hex::decode(input).unwrap()), "{input}");
        }
    }
}
