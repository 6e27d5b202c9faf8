//! Variant codec: tagged unions with an explicit empty state.
//!
//! A user-declared sum type (an ordinary Rust `enum` with one unnamed field
//! per variant) gets a [`VariantShape`] impl from `#[derive(Variant)]`
//! (`tagwire_derive`), which is all [`Variant<T>`] needs to encode/decode
//! it. Rust's own enum already guarantees exactly-one-active-alternative —
//! there's no recursive-union bookkeeping here, just a wire format on top
//! of ordinary pattern matching, which doubles as the "visitation"
//! mechanism: match on `Variant::Empty` vs `Variant::Value(inner)`, then
//! match on `inner`.
use crate::codec::{Decode, Encode};
use crate::error::{Error, Result};
use crate::fungible::Shape;
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

/// Implemented by `#[derive(Variant)]` for a user enum. `active_index`
/// reports which declared alternative `self` holds; `decode_at` builds the
/// alternative named by a given index.
pub trait VariantShape: Sized {
    /// Number of declared alternatives (`n` in `Variant<T0..Tn-1>`).
    fn arity() -> usize;

    /// The `Shape` of each declared alternative, in index order — used by
    /// [`crate::fungible`] to compare two `Variant`s structurally without
    /// needing an instance.
    fn alternative_shapes() -> Vec<Shape>;

    /// The index of the alternative `self` currently holds, in `[0, n)`.
    fn active_index(&self) -> i32;

    /// Encode the currently active alternative's payload (no index, no
    /// prefix — [`Variant::encode`] has already written those).
    fn encode_active<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()>;

    /// Decode the alternative named by `index`. Only called with
    /// `0 <= index < Self::arity()`.
    fn decode_at<R: Reader + ?Sized>(index: i32, r: &mut R) -> Result<Self>;
}

/// `Variant<T0..Tn-1>`: either the explicit empty state (wire index `-1`)
/// or one of `T`'s declared alternatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant<T: VariantShape> {
    Empty,
    Value(T),
}

impl<T: VariantShape> Encode for Variant<T> {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.prepare(5)?;
        w.write_u8(Prefix::Var.into_u8())?;
        match self {
            Variant::Empty => {
                w.write_bytes(&(-1i32).to_le_bytes())?;
                w.write_u8(Prefix::Nil.into_u8())
            }
            Variant::Value(v) => {
                w.write_bytes(&v.active_index().to_le_bytes())?;
                v.encode_active(w)
            }
        }
    }
}

impl<T: VariantShape> Decode for Variant<T> {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        match read_prefix(r)? {
            Prefix::Var => {
                let mut buf = [0u8; 4];
                r.ensure(4)?;
                r.read_exact(&mut buf)?;
                let index = i32::from_le_bytes(buf);
                if index == -1 {
                    match read_prefix(r)? {
                        Prefix::Nil => Ok(Variant::Empty),
                        _ => Err(Error::UnexpectedVariantType),
                    }
                } else if index >= 0 && (index as usize) < T::arity() {
                    Ok(Variant::Value(T::decode_at(index, r)?))
                } else {
                    Err(Error::UnexpectedVariantType)
                }
            }
            _ => Err(Error::UnexpectedEncodingType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};
    use crate::fungible::WireType;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Sample {
        A(u32),
        B(bool),
    }

    impl VariantShape for Sample {
        fn arity() -> usize {
            2
        }

        fn alternative_shapes() -> Vec<Shape> {
            vec![u32::shape(), bool::shape()]
        }

        fn active_index(&self) -> i32 {
            match self {
                Sample::A(_) => 0,
                Sample::B(_) => 1,
            }
        }

        fn encode_active<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
            match self {
                Sample::A(v) => v.encode(w),
                Sample::B(v) => v.encode(w),
            }
        }

        fn decode_at<R: Reader + ?Sized>(index: i32, r: &mut R) -> Result<Self> {
            match index {
                0 => Ok(Sample::A(u32::decode(r)?)),
                1 => Ok(Sample::B(bool::decode(r)?)),
                _ => Err(Error::UnexpectedVariantType),
            }
        }
    }

    #[test]
    fn empty_roundtrip() {
        let v: Variant<Sample> = Variant::Empty;
        let buf = encode_to_vec(&v).unwrap();
        assert_eq!(buf, vec![0xB8, 0xFF, 0xFF, 0xFF, 0xFF, 0xBE]);
        assert_eq!(decode_from_slice::<Variant<Sample>>(&buf).unwrap(), v);
    }

    #[test]
    fn value_roundtrip_matches_scenario() {
        let v: Variant<Sample> = Variant::Value(Sample::B(true));
        // A variant carrying its second alternative, adapted to this
        // sample shape.
        let buf = encode_to_vec(&v).unwrap();
        assert_eq!(buf, vec![0xB8, 0x01, 0, 0, 0, 0x01]);
        assert_eq!(decode_from_slice::<Variant<Sample>>(&buf).unwrap(), v);
    }

    #[test]
    fn out_of_range_index_rejected() {
        let buf = vec![0xB8, 0x02, 0, 0, 0, 0x00];
        assert_eq!(
            decode_from_slice::<Variant<Sample>>(&buf),
            Err(Error::UnexpectedVariantType)
        );
    }
}
