//! Reader/Writer contracts and the in-memory adapters built on them.
//!
//! The core never touches a file descriptor or a socket directly; it only
//! knows how to push bytes through a [`Writer`] and pull them from a
//! [`Reader`]. Stream/file/fd adapters are external collaborators (see the
//! crate's top-level docs) — [`SliceReader`] and `Vec<u8>` are the only
//! adapters this crate ships, and they're what every test in this crate
//! runs against.
use crate::error::{Error, Result};
use byteorder::{ReadBytesExt, WriteBytesExt};

/// Byte-oriented input. Every bulk read is preceded by an [`Reader::ensure`]
/// call so a decoder never blindly trusts an attacker-controlled length
/// before it has confirmed the bytes actually exist.
pub trait Reader {
    /// Confirm at least `n` more bytes are available without consuming them.
    /// Implementations backed by a bounded budget use this to reject
    /// an overrun before any partial read happens.
    fn ensure(&mut self, n: usize) -> Result<()>;

    /// Read a single byte.
    fn read_u8(&mut self) -> Result<u8>;

    /// Look at the next byte without consuming it. Used by the optional
    /// codec to decide between the empty `NIL` case and delegating
    /// to the inner type's own decoder, which needs to see that same byte
    /// as its leading prefix.
    fn peek_u8(&mut self) -> Result<u8>;

    /// Fill `buf` completely or fail.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Discard the next `n` bytes without interpreting them.
    fn skip(&mut self, n: usize) -> Result<()>;

    /// Number of bytes known to remain. Used by container decoders to
    /// validate a declared byte length before committing to an allocation.
    fn remaining(&self) -> usize;

    /// Resolve a handle reference passed out-of-band by the I/O adapter.
    /// The core only ever records the reference; adapters that don't carry
    /// handles reject every reference.
    fn get_handle(&mut self, _reference: u32) -> Result<crate::handle::RawHandle> {
        Err(Error::InvalidHandleReference)
    }
}

/// Byte-oriented output, symmetric with [`Reader`].
pub trait Writer {
    /// Reserve room for at least `n` more bytes. A bounded writer uses this
    /// to reject an overrun before any partial write happens.
    fn prepare(&mut self, n: usize) -> Result<()>;

    /// Write a single byte.
    fn write_u8(&mut self, byte: u8) -> Result<()>;

    /// Write every byte of `buf`.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()>;

    /// Write `n` copies of `fill`. Used to pad a table entry out to its
    /// declared length.
    fn skip(&mut self, n: usize, fill: u8) -> Result<()>;

    /// Hand a handle off to the I/O adapter and get back an opaque
    /// reference to embed in the `HND` payload.
    fn push_handle(&mut self, _handle: crate::handle::RawHandle) -> Result<u32> {
        Err(Error::InvalidHandleValue)
    }
}

/// A [`Reader`] over an in-memory byte slice. The cursor is the slice
/// itself: reading advances `self.0` forward.
#[derive(Clone, Copy, Debug)]
pub struct SliceReader<'a>(pub &'a [u8]);

impl<'a> SliceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        SliceReader(buf)
    }

    /// Bytes not yet consumed.
    pub fn as_slice(&self) -> &'a [u8] {
        self.0
    }
}

impl<'a> Reader for SliceReader<'a> {
    fn ensure(&mut self, n: usize) -> Result<()> {
        if self.0.len() < n {
            Err(Error::StreamError)
        } else {
            Ok(())
        }
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.0.read_u8().expect("ensured above"))
    }

    fn peek_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        Ok(self.0[0])
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure(buf.len())?;
        std::io::Read::read_exact(&mut self.0, buf).map_err(Error::from)
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.0 = &self.0[n..];
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl Writer for Vec<u8> {
    fn prepare(&mut self, n: usize) -> Result<()> {
        self.reserve(n);
        Ok(())
    }

    fn write_u8(&mut self, byte: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, byte).map_err(Error::from)
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn skip(&mut self, n: usize, fill: u8) -> Result<()> {
        self.resize(self.len() + n, fill);
        Ok(())
    }
}
