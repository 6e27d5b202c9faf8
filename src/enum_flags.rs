//! Bitflag enumerations: a closed set of power-of-two
//! discriminants combined with bitwise OR, still wire-identical to its
//! declared underlying integer width. This introduces no new prefix —
//! [`BitFlags<T>`] just forwards to `T`'s own [`Encode`]/[`Decode`]/
//! [`WireType`], so two bitflag sets sharing an underlying width are
//! fungible by the same exact-integer rule ordinary integers are.
use crate::codec::{Decode, Encode};
use crate::error::Result;
use crate::fungible::{Shape, WireType};
use crate::io::{Reader, Writer};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// The closed set of named bits for a bitflag enumeration, plus its
/// underlying unsigned integer representation.
pub trait FlagSet: Copy {
    type Repr: Copy
        + Eq
        + BitOr<Output = Self::Repr>
        + BitAnd<Output = Self::Repr>
        + BitXor<Output = Self::Repr>
        + Not<Output = Self::Repr>
        + Encode
        + Decode
        + WireType
        + Default;

    /// The bit pattern this flag contributes.
    fn bits(self) -> Self::Repr;
}

/// A combination of zero or more [`FlagSet`] bits, wire-identical to
/// `T::Repr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitFlags<T: FlagSet> {
    repr: T::Repr,
    _marker: PhantomData<T>,
}

impl<T: FlagSet> BitFlags<T> {
    pub fn empty() -> Self {
        BitFlags {
            repr: T::Repr::default(),
            _marker: PhantomData,
        }
    }

    pub fn from_repr(repr: T::Repr) -> Self {
        BitFlags {
            repr,
            _marker: PhantomData,
        }
    }

    pub fn repr(self) -> T::Repr {
        self.repr
    }

    pub fn contains(self, flag: T) -> bool
    where
        T::Repr: PartialEq,
    {
        (self.repr & flag.bits()) == flag.bits()
    }

    pub fn insert(&mut self, flag: T) {
        self.repr = self.repr | flag.bits();
    }

    pub fn remove(&mut self, flag: T) {
        self.repr = self.repr & !flag.bits();
    }
}

impl<T: FlagSet> Encode for BitFlags<T> {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        self.repr.encode(w)
    }
}

impl<T: FlagSet> Decode for BitFlags<T> {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        Ok(BitFlags {
            repr: T::Repr::decode(r)?,
            _marker: PhantomData,
        })
    }
}

impl<T: FlagSet> WireType for BitFlags<T> {
    fn shape() -> Shape {
        T::Repr::shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_from_slice, encode_to_vec};

    #[derive(Clone, Copy)]
    enum Perm {
        Read,
        Write,
        Exec,
    }

    impl FlagSet for Perm {
        type Repr = u8;

        fn bits(self) -> u8 {
            match self {
                Perm::Read => 0b001,
                Perm::Write => 0b010,
                Perm::Exec => 0b100,
            }
        }
    }

    #[test]
    fn wire_identical_to_underlying_integer() {
        let mut flags: BitFlags<Perm> = BitFlags::empty();
        flags.insert(Perm::Read);
        flags.insert(Perm::Exec);

        let buf = encode_to_vec(&flags).unwrap();
        assert_eq!(buf, encode_to_vec(&0b101u8).unwrap());

        let back: BitFlags<Perm> = decode_from_slice(&buf).unwrap();
        assert!(back.contains(Perm::Read));
        assert!(!back.contains(Perm::Write));
        assert!(back.contains(Perm::Exec));
    }

    #[test]
    fn remove_clears_only_that_bit() {
        let mut flags: BitFlags<Perm> = BitFlags::empty();
        flags.insert(Perm::Read);
        flags.insert(Perm::Write);
        flags.remove(Perm::Read);
        assert!(!flags.contains(Perm::Read));
        assert!(flags.contains(Perm::Write));
    }

    #[test]
    fn fungible_with_bare_underlying_integer() {
        assert!(crate::fungible::fungible(
            &<BitFlags<Perm> as WireType>::shape(),
            &u8::shape(),
        ));
    }
}
