//! Optional codec: `Option<T>` maps directly onto the wire format's
//! `Optional<T>` — empty is a lone `NIL` byte, present is just the inner
//! value's own encoding with no extra wrapping.
use crate::codec::{Decode, Encode};
use crate::error::Result;
use crate::io::{Reader, Writer};
use crate::prefix::Prefix;

impl<T: Encode> Encode for Option<T> {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        match self {
            None => {
                w.prepare(1)?;
                w.write_u8(Prefix::Nil.into_u8())
            }
            Some(v) => v.encode(w),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        if r.peek_u8()? == Prefix::Nil.into_u8() {
            r.skip(1)?;
            Ok(None)
        } else {
            Ok(Some(T::decode(r)?))
        }
    }
}
