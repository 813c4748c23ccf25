//! Hex string codec for byte buffers and text
//!
//! Validates hex syntax, decodes hex strings into bytes and encodes bytes into
//! canonical lowercase hex. Any type implementing [`BytesConvertible`] gets
//! hex encoding for free.
//!
//! # Example
//!
//! ```
//! use bytes_kit::{Buffer, BytesConvertible, bytes_from_hex_string, is_valid_hex_string};
//!
//! assert!(is_valid_hex_string("1A2b3C"));
//! assert_eq!(bytes_from_hex_string("1a2b3c"), Some(vec![0x1a, 0x2b, 0x3c]));
//! assert_eq!("Bytes".hex_string(), "4279746573");
//!
//! let buffer = Buffer::from_hex_string("abcdef").unwrap();
//! assert_eq!(buffer.as_bytes(), &[0xab, 0xcd, 0xef]);
//! assert!(Buffer::from_hex_string("NOT_A_HEX").is_none());
//! ```

#[macro_use]
mod macros;

mod alphabet;
mod buffer;
mod convertible;
mod decode;
mod encode;
mod error;
#[cfg(feature = "serde")]
mod serde_impls;
mod validate;

// Public API
pub use alphabet::{HEX_STRING_ALLOWED, hex_to_byte, is_hex_char};
pub use buffer::Buffer;
pub use convertible::BytesConvertible;
pub use decode::bytes_from_hex_string;
pub use encode::{HexDisplay, hex_display, hex_string};
pub use error::InvalidHexString;
pub use validate::{HexStr, is_valid_hex_string};
