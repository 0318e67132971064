//! RTCP (RTP Control Protocol) constants and bitmasks.
//!
//! Defines the wire-level constants shared by the header codec and the
//! packet codecs. Values follow RFC 3550 unless noted otherwise.

// --- RTCP Common Header (RFC 3550, Sec 6.4.1) ---

/// RTP/RTCP protocol version carried in the top two bits of every header.
pub const RTCP_VERSION: u8 = 2;
/// Length in bytes of the common RTCP header.
pub const RTCP_HEADER_LENGTH_BYTES: usize = 4;
/// Bit shift of the version field in the first header octet.
pub const RTCP_VERSION_SHIFT: u8 = 6;
/// Mask applied after shifting to extract the version field.
pub const RTCP_VERSION_MASK: u8 = 0x03;
/// Bit shift of the padding (P) flag in the first header octet.
pub const RTCP_PADDING_SHIFT: u8 = 5;
/// Mask applied after shifting to extract the padding flag.
pub const RTCP_PADDING_MASK: u8 = 0x01;
/// Mask for the 5-bit count / subtype field in the first header octet.
pub const RTCP_COUNT_MASK: u8 = 0x1F;
/// Largest value the 5-bit count / subtype field can carry.
pub const RTCP_COUNT_MAX: u8 = 31;
/// Size of one length unit in the header's length field.
pub const RTCP_WORD_SIZE_BYTES: usize = 4;

// --- RTCP Packet Types (IANA "RTP Control Protocol (RTCP) Packet Types") ---

/// Sender report (SR).
pub const PACKET_TYPE_SENDER_REPORT: u8 = 200;
/// Receiver report (RR).
pub const PACKET_TYPE_RECEIVER_REPORT: u8 = 201;
/// Source description (SDES).
pub const PACKET_TYPE_SOURCE_DESCRIPTION: u8 = 202;
/// Goodbye (BYE).
pub const PACKET_TYPE_GOODBYE: u8 = 203;
/// Application-defined (APP).
pub const PACKET_TYPE_APPLICATION_DEFINED: u8 = 204;
/// Transport layer feedback (RTPFB, RFC 4585).
pub const PACKET_TYPE_TRANSPORT_SPECIFIC_FEEDBACK: u8 = 205;
/// Payload-specific feedback (PSFB, RFC 4585).
pub const PACKET_TYPE_PAYLOAD_SPECIFIC_FEEDBACK: u8 = 206;
/// Extended report (XR, RFC 3611).
pub const PACKET_TYPE_EXTENDED_REPORT: u8 = 207;

// --- Application-Defined Packet (RFC 3550, Sec 6.7) ---

/// Size of the fixed APP prefix: header, sender SSRC, name and media SSRC.
pub const APP_FIXED_LENGTH_BYTES: usize = 16;
/// Required length of the ASCII name tag.
pub const APP_NAME_LENGTH_BYTES: usize = 4;
/// Largest application data payload accepted when marshalling.
///
/// Kept at `0xFFFF - 16` for wire compatibility with existing peers even though
/// the word-counted length field could describe a larger payload.
pub const APP_MAX_DATA_LENGTH: usize = 0xFFFF - APP_FIXED_LENGTH_BYTES;

/// Offset of the sender SSRC within an APP packet.
pub const APP_SENDER_SSRC_OFFSET: usize = 4;
/// Offset of the name tag within an APP packet.
pub const APP_NAME_OFFSET: usize = 8;
/// Offset of the media SSRC within an APP packet.
pub const APP_MEDIA_SSRC_OFFSET: usize = 12;
/// Offset of the application data within an APP packet.
pub const APP_DATA_OFFSET: usize = 16;
