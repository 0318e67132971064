//! `rtcpstar`: A memory-safe codec for RTCP application-defined (APP) packets.
//!
//! This library converts between [`ApplicationDefined`] packets and their exact
//! RTCP wire layout (RFC 3550, Sec 6.7), including the 32-bit alignment padding.
//! It also carries the common RTCP [`Header`] codec the APP codec builds on, and a
//! closed [`RtcpPacket`] enum that selects a packet variant from the header type.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytes::Bytes;
//! use rtcpstar::{ApplicationDefined, Packet, RtcpPacket, Ssrc};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let packet = ApplicationDefined {
//!         sub_type: 5,
//!         sender_ssrc: Ssrc::new(0x01020304),
//!         media_ssrc: Ssrc::new(0x05060708),
//!         name: Bytes::from_static(b"TEST"),
//!         data: Bytes::from_static(&[0x01, 0x02, 0x03]),
//!     };
//!
//!     let raw = packet.marshal()?;
//!     assert_eq!(raw.len(), packet.marshal_size());
//!     assert_eq!(raw[raw.len() - 1], 0x01); // one padding byte
//!
//!     match RtcpPacket::unmarshal(&raw)? {
//!         RtcpPacket::ApplicationDefined(decoded) => assert_eq!(decoded, packet),
//!         other => panic!("unexpected packet: {other}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Decoded buffers
//!
//! Decoding takes `&Bytes` and returns packets whose `name` and `data` are
//! slices of that same allocation. No bytes are copied and no lifetime ties the
//! packet to the input; the input allocation lives as long as any slice of it.
//! [`ApplicationDefined::unmarshal_slice`] accepts a plain `&[u8]` and copies it
//! once.

pub mod application_defined;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod packet_defs;
pub mod traits;
pub mod types;

pub use application_defined::ApplicationDefined;
pub use config::{DecodeConfig, PaddingValidation};
pub use error::{Field, ParseContext, RtcpBuildingError, RtcpError, RtcpParsingError};
pub use header::Header;
pub use packet_defs::{PacketType, RawPacket, RtcpPacket};
pub use traits::Packet;
pub use types::Ssrc;
