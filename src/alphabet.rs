//! Hex alphabet and lookup tables

/// Characters allowed in a hex string.
pub const HEX_STRING_ALLOWED: &str = "0123456789ABCDEFabcdef";

/// Value marking a byte that is not a hex digit.
pub(crate) const INVALID: u8 = 0xFF;

/// Decode lookup table: maps an ASCII byte to 0-15, or [`INVALID`].
///
/// Every byte >= 0x80 is invalid, so scanning UTF-8 bytes rejects exactly the
/// strings a per-character scan would.
pub(crate) const HEX_TABLE: &[u8; 256] = &{
    let mut buf = [INVALID; 256];
    let mut i: u8 = 0;
    loop {
        buf[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'a'..=b'f' => i - b'a' + 10,
            b'A'..=b'F' => i - b'A' + 10,
            _ => INVALID,
        };
        if i == 255 {
            break buf;
        }
        i += 1;
    }
};

/// Encode table (lowercase).
pub(crate) static HEX_CHARS: [u8; 16] = *b"0123456789abcdef";

/// Whether `c` belongs to [`HEX_STRING_ALLOWED`].
#[inline]
pub const fn is_hex_char(c: char) -> bool { c.is_ascii() && HEX_TABLE[c as usize] != INVALID }

/// Value of a single hex digit.
#[inline(always)]
pub(crate) const fn nibble(digit: u8) -> Option<u8> {
    match HEX_TABLE[digit as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Decode two hex digits into one byte
#[inline(always)]
pub const fn hex_to_byte(hi: u8, lo: u8) -> Option<u8> {
    let high = HEX_TABLE[hi as usize];
    if high == INVALID {
        return None;
    }
    let low = HEX_TABLE[lo as usize];
    if low == INVALID {
        return None;
    }
    Some((high << 4) | low)
}
