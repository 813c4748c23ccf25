use crate::{buffer::Buffer, decode::bytes_from_hex_string, encode::hex_string};
use core::fmt;

impl serde::Serialize for Buffer {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: serde::Serializer {
        serializer.serialize_str(&hex_string(self))
    }
}

struct BufferVisitor;

impl<'de> serde::de::Visitor<'de> for BufferVisitor {
    type Value = Buffer;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a hex string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where E: serde::de::Error {
        match bytes_from_hex_string(v) {
            Some(bytes) => Ok(Buffer::from(bytes)),
            None => Err(E::custom(format_args!("invalid hex string: {v:?}"))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Buffer {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Buffer, D::Error>
    where D: serde::Deserializer<'de> {
        deserializer.deserialize_str(BufferVisitor)
    }
}
