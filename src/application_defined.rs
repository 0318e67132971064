//! Application-defined (APP) packet serialization and deserialization.
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |V=2|P| subtype |   PT=APP=204  |             length            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           SSRC/CSRC                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          name (ASCII)                         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           media SSRC                          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                   application-dependent data                ...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Data is followed by 0-3 padding bytes so the packet ends on a 32-bit
//! boundary. Each padding byte holds the padding count.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use tracing::{debug, trace};

use crate::config::{DecodeConfig, PaddingValidation};
use crate::constants::{
    APP_DATA_OFFSET, APP_FIXED_LENGTH_BYTES, APP_MAX_DATA_LENGTH, APP_MEDIA_SSRC_OFFSET,
    APP_NAME_LENGTH_BYTES, APP_NAME_OFFSET, APP_SENDER_SSRC_OFFSET, RTCP_HEADER_LENGTH_BYTES,
    RTCP_WORD_SIZE_BYTES,
};
use crate::error::{ParseContext, RtcpBuildingError, RtcpParsingError};
use crate::header::Header;
use crate::packet_defs::PacketType;
use crate::traits::Packet;
use crate::types::Ssrc;

/// An RTCP application-defined packet.
///
/// Decoded `name` and `data` share the allocation of the buffer they were
/// parsed from. Holding either keeps the whole input buffer alive; call
/// `Bytes::copy_from_slice` on them to detach.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplicationDefined {
    /// Application subtype, 0-31. Carried in the header's count field.
    pub sub_type: u8,
    /// SSRC of the packet originator.
    pub sender_ssrc: Ssrc,
    /// SSRC of the media stream this packet is about.
    pub media_ssrc: Ssrc,
    /// Four-byte ASCII tag naming the data format.
    #[serde_as(as = "Hex")]
    pub name: Bytes,
    /// Application-dependent payload.
    #[serde_as(as = "Hex")]
    pub data: Bytes,
}

/// Number of padding bytes needed to align `data_len` to a 32-bit boundary.
#[inline]
pub fn padding_size(data_len: usize) -> usize {
    (RTCP_WORD_SIZE_BYTES - data_len % RTCP_WORD_SIZE_BYTES) % RTCP_WORD_SIZE_BYTES
}

impl ApplicationDefined {
    /// Number of padding bytes appended after `data` when marshalled.
    #[inline]
    pub fn padding_size(&self) -> usize {
        padding_size(self.data.len())
    }

    fn validate(&self) -> Result<(), RtcpBuildingError> {
        if self.data.len() > APP_MAX_DATA_LENGTH {
            debug!(
                size = self.data.len(),
                max = APP_MAX_DATA_LENGTH,
                "APP data too large"
            );
            return Err(RtcpBuildingError::DataTooLarge {
                size: self.data.len(),
                max: APP_MAX_DATA_LENGTH,
            });
        }
        if self.name.len() != APP_NAME_LENGTH_BYTES {
            debug!(len = self.name.len(), "APP name is not four bytes");
            return Err(RtcpBuildingError::InvalidName {
                len: self.name.len(),
            });
        }
        Ok(())
    }

    /// Parses an APP packet from a borrowed slice.
    ///
    /// Copies `raw` once so the decoded packet owns its data.
    pub fn unmarshal_slice(raw: &[u8]) -> Result<Self, RtcpParsingError> {
        Self::unmarshal_with(&Bytes::copy_from_slice(raw), &DecodeConfig::default())
    }

    /// Parses an APP packet using the given decode options.
    ///
    /// `raw` must hold exactly one packet: the header length must match
    /// `raw.len()`. With lax padding validation (the default) only the final
    /// byte is read, as the padding count.
    ///
    /// # Returns
    /// - `Ok(ApplicationDefined)`: Parsed packet sharing `raw`'s allocation
    /// - `Err(RtcpParsingError)`: Malformed header, length, type or padding
    pub fn unmarshal_with(raw: &Bytes, config: &DecodeConfig) -> Result<Self, RtcpParsingError> {
        let header = Header::unmarshal(raw)?;

        if raw.len() < APP_FIXED_LENGTH_BYTES {
            debug!(len = raw.len(), "APP packet shorter than fixed fields");
            return Err(RtcpParsingError::PacketTooShort {
                needed: APP_FIXED_LENGTH_BYTES,
                got: raw.len(),
                context: ParseContext::ApplicationDefinedFixed,
            });
        }

        let declared = header.packet_size_bytes();
        if declared != raw.len() {
            debug!(declared, actual = raw.len(), "APP length field mismatch");
            return Err(RtcpParsingError::InvalidLength {
                declared,
                actual: raw.len(),
            });
        }

        if header.packet_type != PacketType::ApplicationDefined {
            debug!(packet_type = %header.packet_type, "not an APP packet");
            return Err(RtcpParsingError::WrongType {
                expected: PacketType::ApplicationDefined.into(),
                got: header.packet_type.into(),
            });
        }

        let padding = if header.padding {
            Self::read_padding(raw, config.padding_validation)?
        } else {
            0
        };

        let sender_ssrc = Ssrc::from_be_bytes([
            raw[APP_SENDER_SSRC_OFFSET],
            raw[APP_SENDER_SSRC_OFFSET + 1],
            raw[APP_SENDER_SSRC_OFFSET + 2],
            raw[APP_SENDER_SSRC_OFFSET + 3],
        ]);
        let media_ssrc = Ssrc::from_be_bytes([
            raw[APP_MEDIA_SSRC_OFFSET],
            raw[APP_MEDIA_SSRC_OFFSET + 1],
            raw[APP_MEDIA_SSRC_OFFSET + 2],
            raw[APP_MEDIA_SSRC_OFFSET + 3],
        ]);

        let packet = ApplicationDefined {
            sub_type: header.count,
            sender_ssrc,
            media_ssrc,
            name: raw.slice(APP_NAME_OFFSET..APP_NAME_OFFSET + APP_NAME_LENGTH_BYTES),
            data: raw.slice(APP_DATA_OFFSET..raw.len() - padding),
        };
        trace!(
            sub_type = packet.sub_type,
            data_len = packet.data.len(),
            padding,
            "decoded APP packet"
        );
        Ok(packet)
    }

    /// Reads the padding count from the final byte of a length-checked packet.
    fn read_padding(raw: &[u8], validation: PaddingValidation) -> Result<usize, RtcpParsingError> {
        let available = raw.len() - APP_FIXED_LENGTH_BYTES;
        let padding = raw[raw.len() - 1] as usize;
        if padding > available {
            debug!(padding, available, "APP padding exceeds payload");
            return Err(RtcpParsingError::WrongPadding { padding, available });
        }

        if validation == PaddingValidation::Strict {
            let padding_bytes = &raw[raw.len() - padding..];
            if padding == 0 || padding_bytes.iter().any(|&b| b as usize != padding) {
                debug!(padding, "APP padding bytes inconsistent with count");
                return Err(RtcpParsingError::WrongPadding { padding, available });
            }
        }

        Ok(padding)
    }

    /// Creates a packet with representative field values for tests.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn test_fixture() -> Self {
        ApplicationDefined {
            sub_type: 5,
            sender_ssrc: Ssrc::new(0x01020304),
            media_ssrc: Ssrc::new(0x05060708),
            name: Bytes::from_static(b"TEST"),
            data: Bytes::from_static(&[0x01, 0x02, 0x03]),
        }
    }
}

impl Packet for ApplicationDefined {
    fn header(&self) -> Header {
        let words = self.marshal_size() / RTCP_WORD_SIZE_BYTES;
        Header {
            padding: self.padding_size() != 0,
            count: self.sub_type,
            packet_type: PacketType::ApplicationDefined,
            length: u16::try_from(words - 1).unwrap_or(u16::MAX),
        }
    }

    fn destination_ssrc(&self) -> Vec<Ssrc> {
        vec![self.media_ssrc]
    }

    fn marshal_size(&self) -> usize {
        APP_FIXED_LENGTH_BYTES + self.data.len() + self.padding_size()
    }

    fn marshal_to(&self, out: &mut [u8]) -> Result<usize, RtcpBuildingError> {
        self.validate()?;

        let header_bytes = self.header().marshal()?;

        let size = self.marshal_size();
        if out.len() < size {
            return Err(RtcpBuildingError::BufferTooSmall {
                needed: size,
                available: out.len(),
                context: ParseContext::ApplicationDefinedPacket,
            });
        }

        out[..RTCP_HEADER_LENGTH_BYTES].copy_from_slice(&header_bytes);
        out[APP_SENDER_SSRC_OFFSET..APP_NAME_OFFSET]
            .copy_from_slice(&self.sender_ssrc.to_be_bytes());
        out[APP_NAME_OFFSET..APP_MEDIA_SSRC_OFFSET].copy_from_slice(&self.name);
        out[APP_MEDIA_SSRC_OFFSET..APP_DATA_OFFSET].copy_from_slice(&self.media_ssrc.to_be_bytes());

        let data_end = APP_DATA_OFFSET + self.data.len();
        out[APP_DATA_OFFSET..data_end].copy_from_slice(&self.data);

        let padding = self.padding_size();
        // Self-describing padding: every byte carries the count.
        out[data_end..size].fill(padding as u8);

        debug_assert_eq!(size % RTCP_WORD_SIZE_BYTES, 0);
        trace!(
            sub_type = self.sub_type,
            size,
            padding,
            "encoded APP packet"
        );
        Ok(size)
    }

    fn unmarshal(raw: &Bytes) -> Result<Self, RtcpParsingError> {
        Self::unmarshal_with(raw, &DecodeConfig::default())
    }
}

impl fmt::Display for ApplicationDefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ApplicationDefined from {:x}", self.sender_ssrc)?;
        write!(
            f,
            "Subtype: {}, Name: {}, MediaSSRC:{:x}, Data:0x",
            self.sub_type,
            String::from_utf8_lossy(&self.name),
            self.media_ssrc
        )?;
        for byte in self.data.iter() {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
