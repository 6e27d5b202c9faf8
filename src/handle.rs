//! Handle passing (the `HND` prefix).
//!
//! UNIX file-descriptor passing and similar out-of-band transfers are
//! external collaborators: this module defines the shape of a handle
//! reference on the wire and the policy contract a handle type must supply,
//! but it never opens, duplicates, or closes anything itself. An I/O
//! adapter that actually carries handles implements [`Reader::get_handle`]
//! and [`Writer::push_handle`] (see [`crate::io`]); the default
//! implementations reject every reference.

use crate::error::{Error, Result};
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

/// An opaque, adapter-defined handle value. The core never interprets the
/// bits; it only carries a type tag alongside them so a decoder can check
/// the tag against the declared policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawHandle {
    pub type_tag: u32,
    pub value: u64,
}

/// Declares a handle type's default/empty value, validity predicate, and
/// release operation. Ownership of a handle is exclusive and move-only;
/// the policy's `close` is guaranteed to run on scope exit unless the
/// handle was explicitly released first — that discipline is the caller's
/// responsibility, not this trait's.
pub trait HandlePolicy: Sized {
    /// Tag embedded in the `HND` payload, checked against the wire on
    /// decode; a mismatch is [`Error::UnexpectedHandleType`].
    const TYPE_TAG: u32;

    /// The value representing "no handle".
    fn empty() -> Self;

    /// Whether `self` is a live, usable handle.
    fn is_valid(&self) -> bool;

    /// Release the underlying resource. Called at most once per handle.
    fn close(&mut self);
}

/// Encode a handle: hand it to the writer's adapter and record the
/// returned reference alongside the policy's type tag.
pub fn encode_handle<H: HandlePolicy, W: Writer + ?Sized>(
    raw: RawHandle,
    w: &mut W,
) -> Result<()> {
    if raw.type_tag != H::TYPE_TAG {
        return Err(Error::UnexpectedHandleType);
    }
    w.prepare(5)?;
    w.write_u8(Prefix::Hnd.into_u8())?;
    let reference = w.push_handle(raw)?;
    w.write_bytes(&reference.to_le_bytes())
}

/// Decode a handle reference and resolve it through the reader's adapter.
pub fn decode_handle<H: HandlePolicy, R: Reader + ?Sized>(r: &mut R) -> Result<RawHandle> {
    let prefix = read_prefix(r)?;
    if !matches!(prefix, Prefix::Hnd) {
        return Err(Error::UnexpectedEncodingType);
    }
    r.ensure(4)?;
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    let reference = u32::from_le_bytes(buf);
    let raw = r.get_handle(reference)?;
    if raw.type_tag != H::TYPE_TAG {
        return Err(Error::UnexpectedHandleType);
    }
    Ok(raw)
}
