//! RTCP packet type definitions and identifiers.
//!
//! Defines the packet type codes carried in the common header and the closed
//! set of packet variants this crate decodes.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::application_defined::ApplicationDefined;
use crate::config::DecodeConfig;
use crate::constants::*;
use crate::error::{ParseContext, RtcpBuildingError, RtcpParsingError};
use crate::header::Header;
use crate::traits::Packet;
use crate::types::Ssrc;

/// RTCP packet type identifiers.
///
/// The numeric values correspond to the IANA assigned RTCP packet types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum PacketType {
    /// Sender report (200)
    SenderReport,
    /// Receiver report (201)
    ReceiverReport,
    /// Source description (202)
    SourceDescription,
    /// Goodbye (203)
    Goodbye,
    /// Application-defined (204)
    ApplicationDefined,
    /// Transport layer feedback (205)
    TransportSpecificFeedback,
    /// Payload-specific feedback (206)
    PayloadSpecificFeedback,
    /// Extended report (207)
    ExtendedReport,
    /// Any other packet type
    Unsupported(u8),
}

impl From<u8> for PacketType {
    fn from(value: u8) -> Self {
        match value {
            PACKET_TYPE_SENDER_REPORT => PacketType::SenderReport,
            PACKET_TYPE_RECEIVER_REPORT => PacketType::ReceiverReport,
            PACKET_TYPE_SOURCE_DESCRIPTION => PacketType::SourceDescription,
            PACKET_TYPE_GOODBYE => PacketType::Goodbye,
            PACKET_TYPE_APPLICATION_DEFINED => PacketType::ApplicationDefined,
            PACKET_TYPE_TRANSPORT_SPECIFIC_FEEDBACK => PacketType::TransportSpecificFeedback,
            PACKET_TYPE_PAYLOAD_SPECIFIC_FEEDBACK => PacketType::PayloadSpecificFeedback,
            PACKET_TYPE_EXTENDED_REPORT => PacketType::ExtendedReport,
            unknown => PacketType::Unsupported(unknown),
        }
    }
}

impl From<PacketType> for u8 {
    fn from(packet_type: PacketType) -> Self {
        match packet_type {
            PacketType::SenderReport => PACKET_TYPE_SENDER_REPORT,
            PacketType::ReceiverReport => PACKET_TYPE_RECEIVER_REPORT,
            PacketType::SourceDescription => PACKET_TYPE_SOURCE_DESCRIPTION,
            PacketType::Goodbye => PACKET_TYPE_GOODBYE,
            PacketType::ApplicationDefined => PACKET_TYPE_APPLICATION_DEFINED,
            PacketType::TransportSpecificFeedback => PACKET_TYPE_TRANSPORT_SPECIFIC_FEEDBACK,
            PacketType::PayloadSpecificFeedback => PACKET_TYPE_PAYLOAD_SPECIFIC_FEEDBACK,
            PacketType::ExtendedReport => PACKET_TYPE_EXTENDED_REPORT,
            PacketType::Unsupported(val) => val,
        }
    }
}

impl fmt::Display for PacketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketType::SenderReport => f.write_str("SR"),
            PacketType::ReceiverReport => f.write_str("RR"),
            PacketType::SourceDescription => f.write_str("SDES"),
            PacketType::Goodbye => f.write_str("BYE"),
            PacketType::ApplicationDefined => f.write_str("APP"),
            PacketType::TransportSpecificFeedback => f.write_str("RTPFB"),
            PacketType::PayloadSpecificFeedback => f.write_str("PSFB"),
            PacketType::ExtendedReport => f.write_str("XR"),
            PacketType::Unsupported(val) => write!(f, "PT{}", val),
        }
    }
}

/// A packet this crate does not decode field by field.
///
/// Holds the complete packet, header included. Only the header is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPacket {
    header: Header,
    bytes: Bytes,
}

impl RawPacket {
    /// The complete packet bytes.
    pub fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }
}

impl Packet for RawPacket {
    fn header(&self) -> Header {
        self.header
    }

    fn destination_ssrc(&self) -> Vec<Ssrc> {
        Vec::new()
    }

    fn marshal_size(&self) -> usize {
        self.bytes.len()
    }

    fn marshal_to(&self, out: &mut [u8]) -> Result<usize, RtcpBuildingError> {
        if out.len() < self.bytes.len() {
            return Err(RtcpBuildingError::BufferTooSmall {
                needed: self.bytes.len(),
                available: out.len(),
                context: ParseContext::RawPacket,
            });
        }
        out[..self.bytes.len()].copy_from_slice(&self.bytes);
        Ok(self.bytes.len())
    }

    fn unmarshal(raw: &Bytes) -> Result<Self, RtcpParsingError> {
        let header = Header::unmarshal(raw)?;
        Ok(RawPacket {
            header,
            bytes: raw.clone(),
        })
    }
}

impl fmt::Display for RawPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RawPacket {} ({} bytes)",
            self.header.packet_type,
            self.bytes.len()
        )
    }
}

/// Closed set of RTCP packet variants, selected by the header's packet type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RtcpPacket {
    ApplicationDefined(ApplicationDefined),
    Raw(RawPacket),
}

impl RtcpPacket {
    /// Parses a single packet, dispatching on the header's packet type.
    pub fn unmarshal_with(raw: &Bytes, config: &DecodeConfig) -> Result<Self, RtcpParsingError> {
        let header = Header::unmarshal(raw)?;
        trace!(packet_type = %header.packet_type, len = raw.len(), "dispatching RTCP packet");
        match header.packet_type {
            PacketType::ApplicationDefined => Ok(RtcpPacket::ApplicationDefined(
                ApplicationDefined::unmarshal_with(raw, config)?,
            )),
            other => {
                debug!(packet_type = %other, "keeping RTCP packet as raw bytes");
                Ok(RtcpPacket::Raw(RawPacket::unmarshal(raw)?))
            }
        }
    }

    /// Attempts to return a reference to the inner `ApplicationDefined` packet.
    ///
    /// # Returns
    /// `Some(&ApplicationDefined)` if the enum variant is `ApplicationDefined`, `None` otherwise.
    pub fn as_application_defined(&self) -> Option<&ApplicationDefined> {
        match self {
            RtcpPacket::ApplicationDefined(packet) => Some(packet),
            RtcpPacket::Raw(_) => None,
        }
    }

    fn inner(&self) -> &dyn Packet {
        match self {
            RtcpPacket::ApplicationDefined(packet) => packet,
            RtcpPacket::Raw(packet) => packet,
        }
    }
}

impl Packet for RtcpPacket {
    fn header(&self) -> Header {
        self.inner().header()
    }

    fn destination_ssrc(&self) -> Vec<Ssrc> {
        self.inner().destination_ssrc()
    }

    fn marshal_size(&self) -> usize {
        self.inner().marshal_size()
    }

    fn marshal_to(&self, out: &mut [u8]) -> Result<usize, RtcpBuildingError> {
        self.inner().marshal_to(out)
    }

    fn unmarshal(raw: &Bytes) -> Result<Self, RtcpParsingError> {
        Self::unmarshal_with(raw, &DecodeConfig::default())
    }
}

impl fmt::Display for RtcpPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl From<ApplicationDefined> for RtcpPacket {
    fn from(packet: ApplicationDefined) -> Self {
        RtcpPacket::ApplicationDefined(packet)
    }
}
