use crate::{buffer::Buffer, encode};
use bytes::Bytes;

/// Types that can hand out their contents as a byte sequence.
pub trait BytesConvertible {
    /// The bytes held by the value.
    fn to_bytes(&self) -> Vec<u8>;

    /// Lowercase hex representation of [`to_bytes`](Self::to_bytes).
    #[inline]
    fn hex_string(&self) -> String { encode::hex_string(&self.to_bytes()) }
}

impl BytesConvertible for Buffer {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> { self.as_bytes().to_vec() }

    #[inline]
    fn hex_string(&self) -> String { encode::hex_string(self.as_bytes()) }
}

impl BytesConvertible for Bytes {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> { self.to_vec() }

    #[inline]
    fn hex_string(&self) -> String { encode::hex_string(self) }
}

impl BytesConvertible for str {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> { self.as_bytes().to_vec() }

    #[inline]
    fn hex_string(&self) -> String { encode::hex_string(self.as_bytes()) }
}

impl BytesConvertible for String {
    #[inline]
    fn to_bytes(&self) -> Vec<u8> { self.as_str().to_bytes() }

    #[inline]
    fn hex_string(&self) -> String { self.as_str().hex_string() }
}
