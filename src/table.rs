//! Table codec — the core of the design. A table is a versioned
//! record: each declared entry carries a stable 64-bit id and frames its own
//! payload length, so a reader built against an older or newer schema can
//! skip ids it doesn't recognize. Active/deleted state lives entirely in
//! the declared schema, not on the wire — every entry the writer emits is,
//! by construction, non-tombstone; whether a given reader treats an id as
//! active, deleted, or unknown is purely a property of its own declaration.
use std::collections::HashSet;

use crate::bounded::BoundedReader;
use crate::codec::{Decode, Encode};
use crate::error::{Error, Result};
use crate::fungible::{EntryKind, Shape};
use crate::io::{Reader, Writer};
use crate::prefix::{read_prefix, Prefix};

/// Implemented by `#[derive(Table)]`. Like [`crate::record::Record`], this
/// trait doesn't get a blanket `Encode`/`Decode`/`WireType` impl — the
/// derive macro emits concrete impls that call through to
/// [`encode_table`]/[`decode_table`]/[`table_shape`], so that a
/// `Record`-derived type and a `Table`-derived type can share a crate
/// without Rust's coherence checker seeing two blanket impls for the same
/// target trait.
pub trait Table: Sized {
    /// The table's declared-name hash: SipHash of the
    /// declared name string with the fixed keys
    /// `k0 = 0xBAADF00DDEADBEEF`, `k1 = 0x0123456789ABCDEF`
    /// (see [`crate::sip::table_hash`]).
    const HASH: u64;

    /// Count of entries whose payload is currently non-empty. Tombstones
    /// are never counted — they're never backed by a field at all.
    fn present_count(&self) -> u64;

    /// Every declared entry's id, active/deleted kind, and payload `Shape`,
    /// used by [`crate::fungible`] to compare two table types structurally.
    fn declared_entries() -> Vec<(u64, EntryKind, Shape)>;

    /// Write every active entry, each as `u64 id | u64 byte_length | bytes`,
    /// in any order. The table-level header (prefix, hash, present_count)
    /// has already been written by the time this runs.
    fn encode_entries<W: Writer + ?Sized>(&self, w: &mut W) -> Result<()>;

    /// A table instance with every entry cleared — the starting state a
    /// decode begins from.
    fn empty() -> Self;

    /// Handle one observed entry. If `id` names a declared active entry,
    /// decode its payload from `r` into `self`. If `id` names a declared
    /// tombstone or isn't declared at all, do nothing — the caller
    /// discards whatever's left of `r`'s budget either way.
    fn decode_entry<R: Reader + ?Sized>(
        &mut self,
        id: u64,
        r: &mut BoundedReader<'_, R>,
    ) -> Result<()>;
}

/// The `Shape` a `#[derive(Table)]` type's generated `WireType` impl
/// should return.
pub fn table_shape<T: Table>() -> Shape {
    Shape::Table(T::HASH, T::declared_entries())
}

/// The `TAB` framing a `#[derive(Table)]` type's generated `Encode` impl
/// should delegate to.
pub fn encode_table<T: Table, W: Writer + ?Sized>(value: &T, w: &mut W) -> Result<()> {
    w.prepare(17)?;
    w.write_u8(Prefix::Tab.into_u8())?;
    w.write_bytes(&T::HASH.to_le_bytes())?;
    w.write_bytes(&value.present_count().to_le_bytes())?;
    value.encode_entries(w)
}

/// The `TAB` framing a `#[derive(Table)]` type's generated `Decode` impl
/// should delegate to.
pub fn decode_table<T: Table, R: Reader + ?Sized>(r: &mut R) -> Result<T> {
    match read_prefix(r)? {
        Prefix::Tab => {
            let mut buf = [0u8; 8];
            r.ensure(8)?;
            r.read_exact(&mut buf)?;
            let hash = u64::from_le_bytes(buf);
            if hash != T::HASH {
                return Err(Error::InvalidTableHash);
            }

            r.ensure(8)?;
            r.read_exact(&mut buf)?;
            let present_count = u64::from_le_bytes(buf);

            let mut out = T::empty();
            let mut seen: HashSet<u64> = HashSet::new();
            for _ in 0..present_count {
                r.ensure(8)?;
                r.read_exact(&mut buf)?;
                let id = u64::from_le_bytes(buf);
                if !seen.insert(id) {
                    return Err(Error::DuplicateTableEntry);
                }

                r.ensure(8)?;
                r.read_exact(&mut buf)?;
                let payload_len = u64::from_le_bytes(buf) as usize;

                let mut bounded = BoundedReader::new(r, payload_len)?;
                out.decode_entry(id, &mut bounded)?;
                bounded.read_padding()?;
            }
            Ok(out)
        }
        _ => Err(Error::UnexpectedEncodingType),
    }
}

/// Encode a single active entry's framing: `id | byte_length | payload`.
/// Exposed for `#[derive(Table)]`-generated `encode_entries` bodies, and
/// directly useful to a caller hand-writing a [`Table`] impl.
pub fn encode_entry<V: Encode, W: Writer + ?Sized>(id: u64, value: &V, w: &mut W) -> Result<()> {
    let payload = crate::codec::encode_to_vec(value)?;
    w.prepare(16 + payload.len())?;
    w.write_bytes(&id.to_le_bytes())?;
    w.write_bytes(&(payload.len() as u64).to_le_bytes())?;
    w.write_bytes(&payload)
}
