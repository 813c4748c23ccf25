use crate::alphabet::HEX_CHARS;
use core::fmt;

/// Encode bytes as a lowercase hex string, two characters per byte.
#[inline]
pub fn hex_string(bytes: &[u8]) -> String {
    let mut buf = Vec::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        buf.extend_from_slice(&byte_to_hex(byte));
    }
    // SAFETY: HEX_CHARS only holds ASCII
    unsafe { String::from_utf8_unchecked(buf) }
}

#[inline(always)]
fn byte_to_hex(byte: u8) -> [u8; 2] {
    [HEX_CHARS[(byte >> 4) as usize], HEX_CHARS[(byte & 0x0F) as usize]]
}

/// Lazily formats a byte slice as lowercase hex.
#[derive(Clone, Copy)]
pub struct HexDisplay<'a>(&'a [u8]);

#[inline]
pub fn hex_display(bytes: &[u8]) -> HexDisplay<'_> { HexDisplay(bytes) }

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.0 {
            let pair = byte_to_hex(byte);
            // SAFETY: ASCII
            f.write_str(unsafe { core::str::from_utf8_unchecked(&pair) })?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDisplay<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { fmt::Display::fmt(self, f) }
}
