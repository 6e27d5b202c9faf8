//! The `Result<E,T>` value kind. Named [`Outcome`] here to avoid
//! colliding with `std::result::Result`/this crate's own fallible-operation
//! `Result` alias. A value carries `T` directly (no wrapping); an error
//! carries the `ERR` prefix followed by `E`'s own encoding.
use crate::codec::{Decode, Encode};
use crate::error::Result;
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

/// `Result<E,T>`: either an enumeration error `E`, or a successful value
/// `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome<E, T> {
    Value(T),
    Error(E),
}

impl<E: Encode, T: Encode> Encode for Outcome<E, T> {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        match self {
            Outcome::Value(v) => v.encode(w),
            Outcome::Error(e) => {
                w.prepare(1)?;
                w.write_u8(Prefix::Err.into_u8())?;
                e.encode(w)
            }
        }
    }
}

impl<E: Decode, T: Decode> Decode for Outcome<E, T> {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        if r.peek_u8()? == Prefix::Err.into_u8() {
            let _ = read_prefix(r)?;
            Ok(Outcome::Error(E::decode(r)?))
        } else {
            Ok(Outcome::Value(T::decode(r)?))
        }
    }
}
