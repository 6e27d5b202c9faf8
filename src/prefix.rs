//! The wire prefix byte table. For internal use by the primitive, container,
//! optional/result/variant, record and table codecs.
use crate::error::{Error, Result};

/// The single leading byte of every encoded value, decomposed into its
/// meaning. Constructed from and converted back to the raw byte with
/// [`Prefix::from_u8`]/[`Prefix::into_u8`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prefix {
    /// `0x00..=0x7F`; value equals the byte.
    PosFixInt(u8),
    /// `0xC0..=0xFF`; value equals the signed interpretation (`-64..=-1`).
    NegFixInt(i8),
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    /// `0x8A..=0xB4`, rejected on read.
    Reserved,
    Tab,
    Err,
    Hnd,
    Var,
    Stc,
    Ary,
    Map,
    Bin,
    Str,
    Nil,
    Ext,
}

impl Prefix {
    pub fn from_u8(n: u8) -> Prefix {
        match n {
            0x00..=0x7F => Prefix::PosFixInt(n),
            0x80 => Prefix::U8,
            0x81 => Prefix::U16,
            0x82 => Prefix::U32,
            0x83 => Prefix::U64,
            0x84 => Prefix::I8,
            0x85 => Prefix::I16,
            0x86 => Prefix::I32,
            0x87 => Prefix::I64,
            0x88 => Prefix::F32,
            0x89 => Prefix::F64,
            0x8A..=0xB4 => Prefix::Reserved,
            0xB5 => Prefix::Tab,
            0xB6 => Prefix::Err,
            0xB7 => Prefix::Hnd,
            0xB8 => Prefix::Var,
            0xB9 => Prefix::Stc,
            0xBA => Prefix::Ary,
            0xBB => Prefix::Map,
            0xBC => Prefix::Bin,
            0xBD => Prefix::Str,
            0xBE => Prefix::Nil,
            0xBF => Prefix::Ext,
            0xC0..=0xFF => Prefix::NegFixInt((n as i32 - 256) as i8),
        }
    }

    pub fn into_u8(self) -> u8 {
        match self {
            Prefix::PosFixInt(v) => v,
            Prefix::NegFixInt(v) => v as u8,
            Prefix::U8 => 0x80,
            Prefix::U16 => 0x81,
            Prefix::U32 => 0x82,
            Prefix::U64 => 0x83,
            Prefix::I8 => 0x84,
            Prefix::I16 => 0x85,
            Prefix::I32 => 0x86,
            Prefix::I64 => 0x87,
            Prefix::F32 => 0x88,
            Prefix::F64 => 0x89,
            Prefix::Reserved => 0x8A,
            Prefix::Tab => 0xB5,
            Prefix::Err => 0xB6,
            Prefix::Hnd => 0xB7,
            Prefix::Var => 0xB8,
            Prefix::Stc => 0xB9,
            Prefix::Ary => 0xBA,
            Prefix::Map => 0xBB,
            Prefix::Bin => 0xBC,
            Prefix::Str => 0xBD,
            Prefix::Nil => 0xBE,
            Prefix::Ext => 0xBF,
        }
    }
}

impl From<u8> for Prefix {
    fn from(v: u8) -> Prefix {
        Prefix::from_u8(v)
    }
}

impl From<Prefix> for u8 {
    fn from(v: Prefix) -> u8 {
        v.into_u8()
    }
}

/// Read a single prefix byte and reject the reserved range up front. Most
/// callers want this over a bare byte read since a reserved prefix is never
/// a valid start to any value.
pub fn read_prefix<R: crate::io::Reader + ?Sized>(r: &mut R) -> Result<Prefix> {
    let byte = r.read_u8()?;
    let p = Prefix::from_u8(byte);
    if matches!(p, Prefix::Reserved) {
        return Err(Error::UnexpectedEncodingType);
    }
    Ok(p)
}
