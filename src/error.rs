use core::fmt;

/// The input was not a valid hex string.
///
/// Empty input and characters outside `0-9A-Fa-f` both end up here; the
/// cause is not distinguished.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct InvalidHexString;

impl fmt::Display for InvalidHexString {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("invalid hex string") }
}

impl std::error::Error for InvalidHexString {}
