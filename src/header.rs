//! RTCP common header serialization and deserialization.
//!
//! Every RTCP packet starts with the same 4-byte header (RFC 3550, Sec 6.4.1):
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |V=2|P|  count  |      PT       |             length            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! `length` is the packet length in 32-bit words minus one, header included.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    RTCP_COUNT_MASK, RTCP_COUNT_MAX, RTCP_HEADER_LENGTH_BYTES, RTCP_PADDING_MASK,
    RTCP_PADDING_SHIFT, RTCP_VERSION, RTCP_VERSION_MASK, RTCP_VERSION_SHIFT, RTCP_WORD_SIZE_BYTES,
};
use crate::error::{Field, ParseContext, RtcpBuildingError, RtcpParsingError};
use crate::packet_defs::PacketType;

/// Common RTCP packet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Header {
    /// Padding (P) flag. Set when the packet ends with padding bytes.
    pub padding: bool,
    /// Five-bit count field. Its meaning depends on the packet type
    /// (report count, source count, or APP subtype).
    pub count: u8,
    /// Packet type (PT).
    pub packet_type: PacketType,
    /// Packet length in 32-bit words minus one.
    pub length: u16,
}

impl Header {
    /// Total packet size in bytes declared by the length field.
    #[inline]
    pub fn packet_size_bytes(&self) -> usize {
        (self.length as usize + 1) * RTCP_WORD_SIZE_BYTES
    }

    /// Serializes the header into its 4-byte wire form.
    ///
    /// # Returns
    /// - `Ok([u8; 4])`: The encoded header
    /// - `Err(RtcpBuildingError::InvalidHeader)`: `count` does not fit in 5 bits
    pub fn marshal(&self) -> Result<[u8; RTCP_HEADER_LENGTH_BYTES], RtcpBuildingError> {
        if self.count > RTCP_COUNT_MAX {
            debug!(count = self.count, "rejecting RTCP header with oversized count");
            return Err(RtcpBuildingError::InvalidHeader {
                field: Field::Count,
                value: self.count as u32,
                max: RTCP_COUNT_MAX as u32,
            });
        }

        let padding_bit = if self.padding { 1 << RTCP_PADDING_SHIFT } else { 0 };
        let first_octet = (RTCP_VERSION << RTCP_VERSION_SHIFT) | padding_bit | self.count;
        let length = self.length.to_be_bytes();

        Ok([first_octet, u8::from(self.packet_type), length[0], length[1]])
    }

    /// Serializes the header into the first four bytes of `out`.
    ///
    /// # Returns
    /// Number of bytes written (always 4 on success).
    pub fn marshal_to(&self, out: &mut [u8]) -> Result<usize, RtcpBuildingError> {
        if out.len() < RTCP_HEADER_LENGTH_BYTES {
            return Err(RtcpBuildingError::BufferTooSmall {
                needed: RTCP_HEADER_LENGTH_BYTES,
                available: out.len(),
                context: ParseContext::RtcpHeader,
            });
        }
        let encoded = self.marshal()?;
        out[..RTCP_HEADER_LENGTH_BYTES].copy_from_slice(&encoded);
        Ok(RTCP_HEADER_LENGTH_BYTES)
    }

    /// Parses the header from the first four bytes of `raw`.
    ///
    /// Bytes after the header are ignored.
    pub fn unmarshal(raw: &[u8]) -> Result<Self, RtcpParsingError> {
        if raw.len() < RTCP_HEADER_LENGTH_BYTES {
            debug!(len = raw.len(), "RTCP header truncated");
            return Err(RtcpParsingError::PacketTooShort {
                needed: RTCP_HEADER_LENGTH_BYTES,
                got: raw.len(),
                context: ParseContext::RtcpHeader,
            });
        }

        let version = (raw[0] >> RTCP_VERSION_SHIFT) & RTCP_VERSION_MASK;
        if version != RTCP_VERSION {
            debug!(version, "RTCP header has bad version");
            return Err(RtcpParsingError::BadVersion {
                expected: RTCP_VERSION,
                got: version,
            });
        }

        Ok(Header {
            padding: (raw[0] >> RTCP_PADDING_SHIFT) & RTCP_PADDING_MASK == 1,
            count: raw[0] & RTCP_COUNT_MASK,
            packet_type: PacketType::from(raw[1]),
            length: u16::from_be_bytes([raw[2], raw[3]]),
        })
    }
}
