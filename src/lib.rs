//! `tagwire`: compact, self-describing binary serialization for
//! statically-typed records, tables, and tagged unions.
//!
//! The wire format is a small set of byte-prefixed shapes:
//! inline and fixed-width integers, floats, and the composite shapes
//! `array`/`map`/`binary`/`string`/`record`/`table`/`variant`/`error`/
//! `handle`/`nil`. Every shape decodes back into a concrete Rust type via
//! the [`codec::Encode`]/[`codec::Decode`] traits — there's no runtime type
//! dictionary, no `dyn` dispatch, and no schema object walked at
//! serialization time; a value's own type fully determines its wire
//! layout.
//!
//! Three derive macros (from the companion `tagwire-derive` crate) turn a
//! plain Rust type into a wire participant:
//!
//! - `#[derive(Record)]` for a fixed-member struct ([`record`])
//! - `#[derive(Table)]` for a versioned, forward/backward-compatible
//!   struct ([`table`]) — the core of the format
//! - `#[derive(Variant)]` for a tagged union ([`variant`])
//!
//! [`fungible::fungible`] decides whether two declared types share a wire
//! layout even when their names, field order, or exact arity differ;
//! [`protocol`] uses that relation as the single checkpoint a protocol
//! implementation passes through before reading or writing a message.
pub mod bounded;
pub mod codec;
pub mod container;
pub mod enum_flags;
pub mod error;
pub mod fungible;
pub mod handle;
pub mod io;
pub mod optional;
pub mod outcome;
pub mod prefix;
pub mod primitive;
pub mod protocol;
pub mod record;
pub mod scratch;
pub mod sip;
pub mod table;
pub mod variant;

pub use codec::{decode_from_slice, encode_to_vec, Decode, Encode};
pub use container::{Bytes, LogicalBuffer};
pub use enum_flags::{BitFlags, FlagSet};
pub use error::{Error, Result};
pub use fungible::{fungible, EntryKind, Shape, WireType};
pub use handle::{HandlePolicy, RawHandle};
pub use io::{Reader, SliceReader, Writer};
pub use outcome::Outcome;
pub use protocol::Protocol;
pub use record::Record;
pub use scratch::Slot;
pub use table::Table;
pub use variant::{Variant, VariantShape};

pub use tagwire_derive::{Record, Table, Variant};
