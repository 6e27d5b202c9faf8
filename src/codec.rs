//! The central dispatch traits. Every value kind in the data model
//! implements these two traits; there is no dynamic type dictionary behind
//! them; dispatch is resolved entirely at compile time by the concrete `T`.
use crate::error::Result;
use crate::io::{Reader, Writer};

/// Serialize `Self` into a writer, prefix byte and all.
pub trait Encode {
    /// True exactly for the two one-byte integer kinds (`u8`, `i8`). A
    /// sequence/array/fixed-array container checks its element type's flag
    /// to decide between the `binary` and `array` wire shapes; every
    /// other element type leaves this at its default of `false`.
    const ELEMENT_IS_BYTE: bool = false;

    /// Only meaningful when `ELEMENT_IS_BYTE` is `true`; returns the raw
    /// byte a one-byte-element container stores for this value.
    fn element_byte(&self) -> u8 {
        unreachable!("element_byte called on a non-byte-sized element type")
    }

    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()>;
}

/// Deserialize `Self` from a reader, starting at its leading prefix byte.
pub trait Decode: Sized {
    /// Inverse of [`Encode::element_byte`]; only meaningful when
    /// `Encode::ELEMENT_IS_BYTE` is `true` for this type.
    fn from_element_byte(_byte: u8) -> Self {
        unreachable!("from_element_byte called on a non-byte-sized element type")
    }

    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self>;
}

/// Convenience entry points that hide the writer/reader plumbing for the
/// common case of encoding to/from an owned byte buffer.
pub fn encode_to_vec<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    value.encode(&mut buf)?;
    Ok(buf)
}

pub fn decode_from_slice<T: Decode>(buf: &[u8]) -> Result<T> {
    let mut reader = crate::io::SliceReader::new(buf);
    T::decode(&mut reader)
}
