//! Protocol gate: the single checkpoint a send or receive passes
//! through before any bytes move. A protocol declares a request type and a
//! response type; a caller only gets to write or read if the value it's
//! holding is [`fungible`](crate::fungible::fungible) with the protocol's
//! declared type. Everything upstream of this module (records, tables,
//! variants, containers...) is unaware protocols exist at all — this is
//! purely a compatibility checkpoint layered on top of the codec.
use crate::codec::{decode_from_slice, encode_to_vec, Decode, Encode};
use crate::error::{Error, Result};
use crate::fungible::{fungible, WireType};

/// Declares a protocol's two legs. `#[derive(Table)]`/`#[derive(Record)]`/
/// `#[derive(Variant)]` types already implement [`WireType`]; a protocol
/// just names which two of them it carries.
pub trait Protocol {
    type Request: WireType;
    type Response: WireType;
}

/// Check that a value declared as type `V` may stand in for protocol `P`'s
/// request leg. Call this once, at the point a connection's peer
/// advertises (or a stored message declares) the type it's about to send —
/// not per-message, since the shapes involved never change at runtime.
pub fn accepts_request<P: Protocol, V: WireType>() -> Result<()> {
    if fungible(&P::Request::shape(), &V::shape()) {
        Ok(())
    } else {
        Err(Error::InvalidInterfaceMethod)
    }
}

/// Check that a value declared as type `V` may stand in for protocol `P`'s
/// response leg.
pub fn accepts_response<P: Protocol, V: WireType>() -> Result<()> {
    if fungible(&P::Response::shape(), &V::shape()) {
        Ok(())
    } else {
        Err(Error::InvalidInterfaceMethod)
    }
}

/// Encode `request` as protocol `P`'s request leg, gated on fungibility:
/// refuses to produce bytes for a type the protocol wasn't declared to
/// carry, even though nothing at the codec layer below would object.
pub fn send_request<P: Protocol, V: Encode + WireType>(request: &V) -> Result<Vec<u8>> {
    accepts_request::<P, V>()?;
    encode_to_vec(request)
}

/// Decode `buf` as protocol `P`'s request leg into a concrete type `V`,
/// gated the same way as [`send_request`].
pub fn recv_request<P: Protocol, V: Decode + WireType>(buf: &[u8]) -> Result<V> {
    accepts_request::<P, V>()?;
    decode_from_slice(buf)
}

/// Encode `response` as protocol `P`'s response leg, gated on fungibility.
pub fn send_response<P: Protocol, V: Encode + WireType>(response: &V) -> Result<Vec<u8>> {
    accepts_response::<P, V>()?;
    encode_to_vec(response)
}

/// Decode `buf` as protocol `P`'s response leg into a concrete type `V`,
/// gated the same way as [`send_response`].
pub fn recv_response<P: Protocol, V: Decode + WireType>(buf: &[u8]) -> Result<V> {
    accepts_response::<P, V>()?;
    decode_from_slice(buf)
}
