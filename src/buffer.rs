//! Immutable binary buffer

use crate::{decode::bytes_from_hex_string, encode::hex_display, error::InvalidHexString};
use bytes::Bytes;
use core::{fmt, ops::Deref, str::FromStr};

/// An immutable, cheaply clonable byte buffer backed by [`Bytes`].
///
/// Formats as lowercase hex with both `Display` and `Debug`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Buffer {
    inner: Bytes,
}

impl Buffer {
    #[inline]
    pub const fn new() -> Self { Self { inner: Bytes::new() } }

    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self { inner: Bytes::from_static(bytes) }
    }

    /// Build a buffer from a hex string.
    ///
    /// Follows [`bytes_from_hex_string`](crate::bytes_from_hex_string): `None` on empty or
    /// malformed input, and an odd trailing digit becomes its own byte.
    #[inline]
    pub fn from_hex_string(hex: &str) -> Option<Self> {
        bytes_from_hex_string(hex).map(Self::from)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] { &self.inner }

    #[inline]
    pub fn len(&self) -> usize { self.inner.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.inner.is_empty() }

    #[inline]
    pub fn into_inner(self) -> Bytes { self.inner }
}

impl Deref for Buffer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &Self::Target { &self.inner }
}

impl AsRef<[u8]> for Buffer {
    #[inline]
    fn as_ref(&self) -> &[u8] { &self.inner }
}

impl From<Bytes> for Buffer {
    #[inline]
    fn from(inner: Bytes) -> Self { Self { inner } }
}

impl From<Vec<u8>> for Buffer {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self { Self { inner: Bytes::from(bytes) } }
}

impl From<&'static [u8]> for Buffer {
    #[inline]
    fn from(bytes: &'static [u8]) -> Self { Self::from_static(bytes) }
}

impl From<Buffer> for Bytes {
    #[inline]
    fn from(buffer: Buffer) -> Self { buffer.inner }
}

impl From<Buffer> for Vec<u8> {
    #[inline]
    fn from(buffer: Buffer) -> Self { buffer.inner.into() }
}

impl FromStr for Buffer {
    type Err = InvalidHexString;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_string(s).ok_or(InvalidHexString)
    }
}

impl TryFrom<&str> for Buffer {
    type Error = InvalidHexString;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> { s.parse() }
}

impl fmt::Display for Buffer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&hex_display(&self.inner), f)
    }
}

impl fmt::Debug for Buffer {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({})", hex_display(&self.inner))
    }
}
