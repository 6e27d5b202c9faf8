//! Library error types.
//!
use std::fmt;

/// A tagwire `Result`, normally returning a tagwire [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A tagwire error. Encompasses every failure mode the codec can produce: a
/// closed set, each variant carrying no payload beyond what's needed to
/// locate the failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// The leading prefix byte wasn't in the declared target type's match set.
    UnexpectedEncodingType,
    /// A handle's type tag didn't match its declared policy tag.
    UnexpectedHandleType,
    /// A variant's index fell outside `[-1, n)`.
    UnexpectedVariantType,
    /// A fixed-length/tuple/array length on the wire didn't match the
    /// declared length, or a logical buffer pair's length exceeded its
    /// backing capacity.
    InvalidContainerLength,
    /// A record's member count on the wire didn't match its declared count.
    InvalidMemberCount,
    /// A string's byte length wasn't a multiple of its code unit size.
    InvalidStringLength,
    /// A table's hash on the wire didn't match its declared hash.
    InvalidTableHash,
    /// A handle reference didn't resolve to a live handle.
    InvalidHandleReference,
    /// A handle's value failed its policy's validity check.
    InvalidHandleValue,
    /// A method selector didn't match any declared interface method.
    InvalidInterfaceMethod,
    /// A table entry `id` appeared more than once on the wire.
    DuplicateTableEntry,
    /// A bounded reader would have read past its byte budget.
    ReadLimitReached,
    /// A bounded writer would have written past its byte budget.
    WriteLimitReached,
    /// The underlying byte stream failed in a way the core doesn't
    /// interpret further.
    StreamError,
    /// The underlying I/O adapter reported an OS-level failure.
    IoError,
    /// Some other adapter-layer failure outside the core's vocabulary.
    SystemError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            Error::UnexpectedEncodingType => "prefix byte outside the target type's match set",
            Error::UnexpectedHandleType => "handle type tag didn't match the declared policy",
            Error::UnexpectedVariantType => "variant index outside [-1, n)",
            Error::InvalidContainerLength => "container length mismatch",
            Error::InvalidMemberCount => "record member count mismatch",
            Error::InvalidStringLength => "string byte length not a multiple of the code unit size",
            Error::InvalidTableHash => "table hash mismatch",
            Error::InvalidHandleReference => "handle reference did not resolve",
            Error::InvalidHandleValue => "handle value failed its policy's validity check",
            Error::InvalidInterfaceMethod => "method selector did not match any declared method",
            Error::DuplicateTableEntry => "duplicate table entry id",
            Error::ReadLimitReached => "bounded reader budget exceeded",
            Error::WriteLimitReached => "bounded writer budget exceeded",
            Error::StreamError => "stream adapter failure",
            Error::IoError => "I/O adapter failure",
            Error::SystemError => "system adapter failure",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::StreamError,
            _ => Error::IoError,
        }
    }
}
