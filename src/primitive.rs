//! Primitive codec: bool, char, the eight integer widths, and the two
//! float widths. Integers always pick the smallest prefix that losslessly
//! carries the value; floats always use their full-width prefix.

use crate::error::{Error, Result};
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

// The economy-encoding boundaries below (e.g. folding `-64..=-1` into a
// single inline byte) only hold on two's-complement hosts. Rust's integer
// types are two's-complement by definition, but we assert it explicitly
// rather than leaving the dependency implicit.
const _: () = assert!((-1i8 as u8) == 0xFF);

pub(crate) fn encode_u64<W: Writer + ?Sized>(v: u64, w: &mut W) -> Result<()> {
    if v <= 0x7F {
        w.prepare(1)?;
        w.write_u8(v as u8)
    } else if v <= u8::MAX as u64 {
        w.prepare(2)?;
        w.write_u8(Prefix::U8.into_u8())?;
        w.write_u8(v as u8)
    } else if v <= u16::MAX as u64 {
        w.prepare(3)?;
        w.write_u8(Prefix::U16.into_u8())?;
        w.write_bytes(&(v as u16).to_le_bytes())
    } else if v <= u32::MAX as u64 {
        w.prepare(5)?;
        w.write_u8(Prefix::U32.into_u8())?;
        w.write_bytes(&(v as u32).to_le_bytes())
    } else {
        w.prepare(9)?;
        w.write_u8(Prefix::U64.into_u8())?;
        w.write_bytes(&v.to_le_bytes())
    }
}

pub(crate) fn encode_i64<W: Writer + ?Sized>(v: i64, w: &mut W) -> Result<()> {
    if (0..=0x7F).contains(&v) {
        w.prepare(1)?;
        w.write_u8(v as u8)
    } else if (-64..=-1).contains(&v) {
        w.prepare(1)?;
        w.write_u8(v as i8 as u8)
    } else if let Ok(v8) = i8::try_from(v) {
        w.prepare(2)?;
        w.write_u8(Prefix::I8.into_u8())?;
        w.write_u8(v8 as u8)
    } else if let Ok(v16) = i16::try_from(v) {
        w.prepare(3)?;
        w.write_u8(Prefix::I16.into_u8())?;
        w.write_bytes(&v16.to_le_bytes())
    } else if let Ok(v32) = i32::try_from(v) {
        w.prepare(5)?;
        w.write_u8(Prefix::I32.into_u8())?;
        w.write_bytes(&v32.to_le_bytes())
    } else {
        w.prepare(9)?;
        w.write_u8(Prefix::I64.into_u8())?;
        w.write_bytes(&v.to_le_bytes())
    }
}

/// Decode the unsigned integer family (`PosFixInt`, `U8..U64`) into a raw
/// `u64`. Any other prefix is outside an unsigned target's match set.
pub(crate) fn decode_u64<R: Reader + ?Sized>(r: &mut R) -> Result<u64> {
    match read_prefix(r)? {
        Prefix::PosFixInt(v) => Ok(v as u64),
        Prefix::U8 => Ok(r.read_u8()? as u64),
        Prefix::U16 => {
            let mut buf = [0u8; 2];
            r.ensure(2)?;
            r.read_exact(&mut buf)?;
            Ok(u16::from_le_bytes(buf) as u64)
        }
        Prefix::U32 => {
            let mut buf = [0u8; 4];
            r.ensure(4)?;
            r.read_exact(&mut buf)?;
            Ok(u32::from_le_bytes(buf) as u64)
        }
        Prefix::U64 => {
            let mut buf = [0u8; 8];
            r.ensure(8)?;
            r.read_exact(&mut buf)?;
            Ok(u64::from_le_bytes(buf))
        }
        _ => Err(Error::UnexpectedEncodingType),
    }
}

/// Decode the signed integer family (`PosFixInt`, `NegFixInt`, `I8..I64`)
/// into a raw `i64`.
pub(crate) fn decode_i64<R: Reader + ?Sized>(r: &mut R) -> Result<i64> {
    match read_prefix(r)? {
        Prefix::PosFixInt(v) => Ok(v as i64),
        Prefix::NegFixInt(v) => Ok(v as i64),
        Prefix::I8 => Ok(r.read_u8()? as i8 as i64),
        Prefix::I16 => {
            let mut buf = [0u8; 2];
            r.ensure(2)?;
            r.read_exact(&mut buf)?;
            Ok(i16::from_le_bytes(buf) as i64)
        }
        Prefix::I32 => {
            let mut buf = [0u8; 4];
            r.ensure(4)?;
            r.read_exact(&mut buf)?;
            Ok(i32::from_le_bytes(buf) as i64)
        }
        Prefix::I64 => {
            let mut buf = [0u8; 8];
            r.ensure(8)?;
            r.read_exact(&mut buf)?;
            Ok(i64::from_le_bytes(buf))
        }
        _ => Err(Error::UnexpectedEncodingType),
    }
}

macro_rules! impl_unsigned {
    ($t:ty) => {
        impl crate::codec::Encode for $t {
            fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
                encode_u64(*self as u64, w)
            }
        }
        impl crate::codec::Decode for $t {
            fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
                let v = decode_u64(r)?;
                <$t>::try_from(v).map_err(|_| Error::UnexpectedEncodingType)
            }
        }
    };
}

macro_rules! impl_signed {
    ($t:ty) => {
        impl crate::codec::Encode for $t {
            fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
                encode_i64(*self as i64, w)
            }
        }
        impl crate::codec::Decode for $t {
            fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
                let v = decode_i64(r)?;
                <$t>::try_from(v).map_err(|_| Error::UnexpectedEncodingType)
            }
        }
    };
}

impl_unsigned!(u16);
impl_unsigned!(u32);
impl_unsigned!(u64);
impl_signed!(i16);
impl_signed!(i32);
impl_signed!(i64);

impl crate::codec::Encode for u8 {
    const ELEMENT_IS_BYTE: bool = true;

    fn element_byte(&self) -> u8 {
        *self
    }

    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        encode_u64(*self as u64, w)
    }
}

impl crate::codec::Decode for u8 {
    fn from_element_byte(byte: u8) -> Self {
        byte
    }

    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        let v = decode_u64(r)?;
        u8::try_from(v).map_err(|_| Error::UnexpectedEncodingType)
    }
}

impl crate::codec::Encode for i8 {
    const ELEMENT_IS_BYTE: bool = true;

    fn element_byte(&self) -> u8 {
        *self as u8
    }

    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        encode_i64(*self as i64, w)
    }
}

impl crate::codec::Decode for i8 {
    fn from_element_byte(byte: u8) -> Self {
        byte as i8
    }

    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        let v = decode_i64(r)?;
        i8::try_from(v).map_err(|_| Error::UnexpectedEncodingType)
    }
}

impl crate::codec::Encode for bool {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.prepare(1)?;
        w.write_u8(if *self { 1 } else { 0 })
    }
}

impl crate::codec::Decode for bool {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        match r.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(Error::UnexpectedEncodingType),
        }
    }
}

impl crate::codec::Encode for char {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        encode_u64(*self as u64, w)
    }
}

impl crate::codec::Decode for char {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        let v = decode_u64(r)?;
        let v = u32::try_from(v).map_err(|_| Error::UnexpectedEncodingType)?;
        char::from_u32(v).ok_or(Error::UnexpectedEncodingType)
    }
}

impl crate::codec::Encode for f32 {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.prepare(5)?;
        w.write_u8(Prefix::F32.into_u8())?;
        w.write_bytes(&self.to_le_bytes())
    }
}

impl crate::codec::Decode for f32 {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        match read_prefix(r)? {
            Prefix::F32 => {
                let mut buf = [0u8; 4];
                r.ensure(4)?;
                r.read_exact(&mut buf)?;
                Ok(f32::from_le_bytes(buf))
            }
            _ => Err(Error::UnexpectedEncodingType),
        }
    }
}

impl crate::codec::Encode for f64 {
    fn encode<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()> {
        w.prepare(9)?;
        w.write_u8(Prefix::F64.into_u8())?;
        w.write_bytes(&self.to_le_bytes())
    }
}

impl crate::codec::Decode for f64 {
    fn decode<R: Reader + ?Sized>(r: &mut R) -> Result<Self> {
        match read_prefix(r)? {
            Prefix::F64 => {
                let mut buf = [0u8; 8];
                r.ensure(8)?;
                r.read_exact(&mut buf)?;
                Ok(f64::from_le_bytes(buf))
            }
            _ => Err(Error::UnexpectedEncodingType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decode, Encode};

    fn roundtrip<T: Encode + Decode + PartialEq + std::fmt::Debug>(v: T) {
        let mut buf = Vec::new();
        v.encode(&mut buf).unwrap();
        let mut reader = crate::io::SliceReader::new(&buf);
        let out = T::decode(&mut reader).unwrap();
        assert_eq!(v, out);
    }

    #[test]
    fn two_complement_byte_layout_is_assumed() {
        assert_eq!(i8::MIN.to_le_bytes(), [0x80]);
        assert_eq!((-1i64).to_le_bytes(), [0xFF; 8]);
        roundtrip(i8::MIN);
        roundtrip(i64::MIN);
    }

    #[test]
    fn bool_prefixes() {
        let mut buf = Vec::new();
        true.encode(&mut buf).unwrap();
        assert_eq!(buf, vec![0x01]);
        let mut buf = Vec::new();
        false.encode(&mut buf).unwrap();
        assert_eq!(buf, vec![0x00]);
    }

    #[test]
    fn u32_economy() {
        let mut buf = Vec::new();
        300u32.encode(&mut buf).unwrap();
        assert_eq!(buf, vec![0x81, 0x2C, 0x01]);
    }

    #[test]
    fn integer_width_boundaries() {
        for v in [
            -64i64, -65, 127, 128, 255, 256, 32767, 32768, i32::MAX as i64,
            i32::MAX as i64 + 1,
        ] {
            let mut buf = Vec::new();
            encode_i64(v, &mut buf).unwrap();
            let mut reader = crate::io::SliceReader::new(&buf);
            assert_eq!(decode_i64(&mut reader).unwrap(), v);
        }
        for v in [127u64, 128, 255, 256, u32::MAX as u64, u32::MAX as u64 + 1] {
            let mut buf = Vec::new();
            encode_u64(v, &mut buf).unwrap();
            let mut reader = crate::io::SliceReader::new(&buf);
            assert_eq!(decode_u64(&mut reader).unwrap(), v);
        }
    }

    #[test]
    fn roundtrips() {
        roundtrip(true);
        roundtrip(false);
        roundtrip('a');
        roundtrip('\u{1F600}');
        roundtrip(0u8);
        roundtrip(255u8);
        roundtrip(i8::MIN);
        roundtrip(i8::MAX);
        roundtrip(u64::MAX);
        roundtrip(i64::MIN);
        roundtrip(1.5f32);
        roundtrip(3.14159f64);
    }
}
