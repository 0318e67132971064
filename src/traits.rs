//! Core RTCP packet trait.
//!
//! Every packet variant exposes the same capability set so that the closed
//! [`RtcpPacket`](crate::packet_defs::RtcpPacket) enum can delegate to whichever
//! variant it holds.

use std::fmt::{Debug, Display};

use bytes::Bytes;

use crate::error::{RtcpBuildingError, RtcpParsingError};
use crate::header::Header;
use crate::types::Ssrc;

/// Defines the interface shared by all RTCP packet variants.
///
/// `Display` renders a human-readable diagnostic form of the packet. It is
/// meant for logs and is not part of the wire contract.
pub trait Packet: Display + Debug + Send + Sync {
    /// Returns the common header this packet marshals with.
    ///
    /// Only meaningful for packets that would marshal successfully.
    fn header(&self) -> Header;

    /// Returns the SSRCs this packet refers to, used to route it by media stream.
    fn destination_ssrc(&self) -> Vec<Ssrc>;

    /// Returns the size of the packet once marshalled, padding included.
    fn marshal_size(&self) -> usize;

    /// Serializes the packet into the start of `out`.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of bytes written
    /// - `Err(RtcpBuildingError)`: Invalid field values or insufficient buffer space
    fn marshal_to(&self, out: &mut [u8]) -> Result<usize, RtcpBuildingError>;

    /// Serializes the packet into a newly allocated buffer.
    fn marshal(&self) -> Result<Bytes, RtcpBuildingError> {
        let mut buf = vec![0u8; self.marshal_size()];
        let written = self.marshal_to(&mut buf)?;
        buf.truncate(written);
        Ok(Bytes::from(buf))
    }

    /// Parses a single packet from `raw`, which must hold exactly one packet.
    ///
    /// Implementations may return views sharing `raw`'s allocation.
    fn unmarshal(raw: &Bytes) -> Result<Self, RtcpParsingError>
    where
        Self: Sized;
}
