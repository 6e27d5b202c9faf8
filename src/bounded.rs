//! Bounded sub-reader/sub-writer adapters.
//!
//! These are the exclusive mechanism the table codec uses to localize
//! an entry's payload to its declared byte length, but they're plain,
//! reusable wrappers: any caller that needs to hand a nested codec a
//! byte-budgeted view of a larger stream can reach for one directly.
use crate::error::{Error, Result};
use crate::handle::RawHandle;
use crate::io::{Reader, Writer};

/// Wraps an outer [`Reader`] with a hard byte budget. Every call that would
/// overrun the budget fails with [`Error::ReadLimitReached`] rather than
/// touching the outer reader.
pub struct BoundedReader<'a, R: Reader + ?Sized> {
    inner: &'a mut R,
    remaining: usize,
}

impl<'a, R: Reader + ?Sized> BoundedReader<'a, R> {
    /// Open a bounded view of `inner` covering exactly the next `budget`
    /// bytes. Fails immediately if `inner` doesn't have that many bytes.
    pub fn new(inner: &'a mut R, budget: usize) -> Result<Self> {
        inner.ensure(budget)?;
        Ok(BoundedReader {
            inner,
            remaining: budget,
        })
    }

    /// Bytes left in the budget.
    pub fn bytes_left(&self) -> usize {
        self.remaining
    }

    /// Silently discard whatever remains of the budget. Used to skip
    /// trailing padding after a table entry's real payload has been
    /// decoded, or to skip an entry's payload outright when its `id` is
    /// unknown or tombstoned.
    pub fn read_padding(&mut self) -> Result<()> {
        let n = self.remaining;
        self.skip(n)
    }
}

impl<'a, R: Reader + ?Sized> Reader for BoundedReader<'a, R> {
    fn ensure(&mut self, n: usize) -> Result<()> {
        if n > self.remaining {
            return Err(Error::ReadLimitReached);
        }
        self.inner.ensure(n)
    }

    fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        let byte = self.inner.read_u8()?;
        self.remaining -= 1;
        Ok(byte)
    }

    fn peek_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        self.inner.peek_u8()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.ensure(buf.len())?;
        self.inner.read_exact(buf)?;
        self.remaining -= buf.len();
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.inner.skip(n)?;
        self.remaining -= n;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.remaining
    }

    fn get_handle(&mut self, reference: u32) -> Result<RawHandle> {
        self.inner.get_handle(reference)
    }
}

/// Wraps an outer [`Writer`] with a hard byte budget, symmetric with
/// [`BoundedReader`].
pub struct BoundedWriter<'a, W: Writer + ?Sized> {
    inner: &'a mut W,
    remaining: usize,
}

impl<'a, W: Writer + ?Sized> BoundedWriter<'a, W> {
    pub fn new(inner: &'a mut W, budget: usize) -> Self {
        BoundedWriter { inner, remaining: budget }
    }

    /// Bytes left in the budget.
    pub fn bytes_left(&self) -> usize {
        self.remaining
    }

    /// Fill whatever remains of the budget with `fill`. Used to pad a
    /// table entry's payload out to its declared length when the writer
    /// overestimated the size.
    pub fn write_padding(&mut self, fill: u8) -> Result<()> {
        let n = self.remaining;
        self.skip(n, fill)
    }
}

impl<'a, W: Writer + ?Sized> Writer for BoundedWriter<'a, W> {
    fn prepare(&mut self, n: usize) -> Result<()> {
        if n > self.remaining {
            return Err(Error::WriteLimitReached);
        }
        self.inner.prepare(n)
    }

    fn write_u8(&mut self, byte: u8) -> Result<()> {
        self.prepare(1)?;
        self.inner.write_u8(byte)?;
        self.remaining -= 1;
        Ok(())
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.prepare(buf.len())?;
        self.inner.write_bytes(buf)?;
        self.remaining -= buf.len();
        Ok(())
    }

    fn skip(&mut self, n: usize, fill: u8) -> Result<()> {
        self.prepare(n)?;
        self.inner.skip(n, fill)?;
        self.remaining -= n;
        Ok(())
    }

    fn push_handle(&mut self, handle: RawHandle) -> Result<u32> {
        self.inner.push_handle(handle)
    }
}
