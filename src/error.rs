//! RTCP error types and utilities.
//!
//! This module defines the error types used throughout the Rtcpstar library.
//! It distinguishes between parsing errors (raw bytes to packet) and building
//! errors (packet to raw bytes). The `thiserror` crate is used for ergonomic
//! error definitions.

use std::fmt;

use thiserror::Error;

/// Packet field named in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// RTCP version bits in the common header.
    Version,
    /// Five-bit count / subtype field in the common header.
    Count,
    /// 16-bit length field in the common header.
    Length,
    /// Application-defined name tag.
    Name,
    /// Application-defined data payload.
    Data,
    /// Trailing padding count.
    Padding,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Version => "version",
            Field::Count => "count",
            Field::Length => "length",
            Field::Name => "name",
            Field::Data => "data",
            Field::Padding => "padding",
        };
        f.write_str(name)
    }
}

/// Structure being parsed or built when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseContext {
    /// The common 4-byte RTCP header.
    RtcpHeader,
    /// The fixed 16-byte prefix of an application-defined packet.
    ApplicationDefinedFixed,
    /// A complete application-defined packet.
    ApplicationDefinedPacket,
    /// An opaque packet of an unrecognized type.
    RawPacket,
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseContext::RtcpHeader => "RTCP header",
            ParseContext::ApplicationDefinedFixed => "APP fixed fields",
            ParseContext::ApplicationDefinedPacket => "APP packet",
            ParseContext::RawPacket => "raw packet",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during RTCP packet parsing.
///
/// These indicate that an incoming byte sequence is not a well-formed packet
/// of the expected kind. None of them are retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtcpParsingError {
    /// Input is shorter than the structure being parsed.
    #[error("Packet too short: needed {needed} bytes, got {got} for {context}")]
    PacketTooShort {
        needed: usize,
        got: usize,
        context: ParseContext,
    },

    /// Version bits in the common header are not 2.
    #[error("Invalid RTCP version: expected {expected}, got {got}")]
    BadVersion { expected: u8, got: u8 },

    /// Header carries a packet type other than the one being decoded.
    #[error("Wrong RTCP packet type: expected {expected}, got {got}")]
    WrongType { expected: u8, got: u8 },

    /// Header length field disagrees with the actual input size.
    #[error("Invalid packet length: header declares {declared} bytes, got {actual}")]
    InvalidLength { declared: usize, actual: usize },

    /// Padding count is inconsistent with the bytes available after the fixed fields.
    #[error("Wrong padding: padding count {padding} with {available} payload bytes available")]
    WrongPadding { padding: usize, available: usize },
}

/// Errors that can occur during RTCP packet building.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtcpBuildingError {
    /// Application data exceeds the supported maximum.
    #[error("Application data too large: {size} bytes exceeds maximum {max}")]
    DataTooLarge { size: usize, max: usize },

    /// Name tag is not exactly four bytes.
    #[error("Invalid application name: expected 4 bytes, got {len}")]
    InvalidName { len: usize },

    /// A header field does not fit its wire width.
    #[error("Invalid header field '{field}': value {value} exceeds maximum {max}")]
    InvalidHeader { field: Field, value: u32, max: u32 },

    /// Provided buffer was too small for the packet being built.
    #[error("Buffer too small: needed {needed} bytes, have {available} for {context}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
        context: ParseContext,
    },
}

/// Main error type for RTCP operations in Rtcpstar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RtcpError {
    /// Error during packet parsing.
    #[error("Parsing error: {0}")]
    Parsing(#[from] RtcpParsingError),

    /// Error during packet building.
    #[error("Building error: {0}")]
    Building(#[from] RtcpBuildingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packet_too_short_error_display() {
        let err = RtcpParsingError::PacketTooShort {
            needed: 16,
            got: 10,
            context: ParseContext::ApplicationDefinedFixed,
        };
        assert_eq!(
            format!("{}", err),
            "Packet too short: needed 16 bytes, got 10 for APP fixed fields"
        );
    }

    #[test]
    fn invalid_length_error_display() {
        let err = RtcpParsingError::InvalidLength {
            declared: 24,
            actual: 20,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid packet length: header declares 24 bytes, got 20"
        );
    }

    #[test]
    fn wrong_padding_error_display() {
        let err = RtcpParsingError::WrongPadding {
            padding: 10,
            available: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Wrong padding: padding count 10 with 4 payload bytes available"
        );
    }

    #[test]
    fn invalid_header_error_display() {
        let err = RtcpBuildingError::InvalidHeader {
            field: Field::Count,
            value: 40,
            max: 31,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid header field 'count': value 40 exceeds maximum 31"
        );
    }

    #[test]
    fn rtcp_error_from_parsing_error() {
        let parsing_err = RtcpParsingError::BadVersion {
            expected: 2,
            got: 1,
        };
        let rtcp_err = RtcpError::from(parsing_err.clone());
        match rtcp_err {
            RtcpError::Parsing(inner_err) => assert_eq!(inner_err, parsing_err),
            _ => panic!("Incorrect RtcpError variant"),
        }
    }

    #[test]
    fn rtcp_error_from_building_error() {
        let building_err = RtcpBuildingError::InvalidName { len: 2 };
        let rtcp_err = RtcpError::from(building_err.clone());
        match rtcp_err {
            RtcpError::Building(inner_err) => assert_eq!(inner_err, building_err),
            _ => panic!("Incorrect RtcpError variant"),
        }
        assert_eq!(
            format!("{}", RtcpError::from(building_err)),
            "Building error: Invalid application name: expected 4 bytes, got 2"
        );
    }
}
