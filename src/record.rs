//! Record codec: a user-declared tuple-of-named-members with a fixed,
//! declared member order.
//!
//! `#[derive(Record)]` (`tagwire_derive`) implements [`Record`] for a
//! struct, then emits concrete `Encode`/`Decode`/`WireType` impls that call
//! straight through to [`encode_record`]/[`decode_record`]/[`record_shape`].
//! Those three free functions, not a blanket impl, carry the actual `STC`
//! framing: a blanket `impl<T: Record> Encode for T` would conflict with
//! [`crate::table`]'s equally-blanket `impl<T: Table> Encode for T` the
//! moment both traits are in scope, since Rust's coherence check can't
//! prove no type ever implements both. Concrete per-type impls sidestep
//! that entirely — the same reason `#[derive(Serialize)]` never reaches
//! for a blanket impl either. Unknown or reordered members aren't
//! supported here by design — reach for a [`crate::table`] when the member
//! set needs to evolve across versions.
use crate::codec::{Decode, Encode};
use crate::error::{Error, Result};
use crate::fungible::Shape;
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

/// Implemented by `#[derive(Record)]`. `MEMBER_COUNT` and the encode/decode
/// of each member (in declared order) are all [`encode_record`] and
/// [`decode_record`] need.
pub trait Record: Sized {
    /// The statically declared member count; always what the writer emits,
    /// and what the reader checks the wire's count against.
    const MEMBER_COUNT: u64;

    /// True for a record declared with exactly one member named `value` —
    /// such a wrapper is fungible with both other value wrappers and with
    /// bare values of the inner type.
    const IS_VALUE_WRAPPER: bool = false;

    /// The `Shape` of each declared member, in declared order — lets
    /// [`crate::fungible`] compare two record types structurally without
    /// needing an instance of either.
    fn member_shapes() -> Vec<Shape>;

    fn encode_members<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()>;
    fn decode_members<R: Reader + ?Sized>(r: &mut R) -> Result<Self>;
}

/// The `Shape` a `#[derive(Record)]` type's generated `WireType` impl
/// should return.
pub fn record_shape<T: Record>() -> Shape {
    if T::IS_VALUE_WRAPPER {
        Shape::ValueWrapper(Box::new(
            T::member_shapes()
                .into_iter()
                .next()
                .expect("a value wrapper record declares exactly one member"),
        ))
    } else {
        Shape::Record(T::member_shapes())
    }
}

/// The `STC` framing a `#[derive(Record)]` type's generated `Encode` impl
/// should delegate to.
pub fn encode_record<T: Record, W: Writer + ?Sized>(value: &T, w: &mut W) -> Result<()> {
    w.prepare(9)?;
    w.write_u8(Prefix::Stc.into_u8())?;
    w.write_bytes(&T::MEMBER_COUNT.to_le_bytes())?;
    value.encode_members(w)
}

/// The `STC` framing a `#[derive(Record)]` type's generated `Decode` impl
/// should delegate to.
pub fn decode_record<T: Record, R: Reader + ?Sized>(r: &mut R) -> Result<T> {
    match read_prefix(r)? {
        Prefix::Stc => {
            let mut buf = [0u8; 8];
            r.ensure(8)?;
            r.read_exact(&mut buf)?;
            let count = u64::from_le_bytes(buf);
            if count != T::MEMBER_COUNT {
                return Err(Error::InvalidMemberCount);
            }
            T::decode_members(r)
        }
        _ => Err(Error::UnexpectedEncodingType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};
    use crate::fungible::WireType;

    struct Point {
        x: i32,
        y: i32,
    }

    impl Record for Point {
        const MEMBER_COUNT: u64 = 2;

        fn member_shapes() -> Vec<Shape> {
            vec![i32::shape(), i32::shape()]
        }

        fn encode_members<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
            self.x.encode(w)?;
            self.y.encode(w)
        }

        fn decode_members<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
            Ok(Point {
                x: i32::decode(r)?,
                y: i32::decode(r)?,
            })
        }
    }

    impl Encode for Point {
        fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
            encode_record(self, w)
        }
    }

    impl Decode for Point {
        fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
            decode_record(r)
        }
    }

    #[test]
    fn record_roundtrip_and_count_check() {
        let p = Point { x: -3, y: 9 };
        let buf = encode_to_vec(&p).unwrap();
        assert_eq!(buf[0], 0xB9);
        let back: Point = decode_from_slice(&buf).unwrap();
        assert_eq!((back.x, back.y), (p.x, p.y));

        let mut bad = buf.clone();
        bad[1] = 3; // member_count byte (low byte of the u64)
        assert_eq!(
            decode_from_slice::<Point>(&bad),
            Err(Error::InvalidMemberCount)
        );
    }
}
