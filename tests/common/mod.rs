//! Common test utilities for RTCP packet integration tests.

#![allow(dead_code)] // Not every test binary uses every helper

use bytes::Bytes;
use rtcpstar::{ApplicationDefined, Ssrc};
use tracing_subscriber::EnvFilter;

/// Sender SSRC used by the reference APP packet.
pub const TEST_SENDER_SSRC: u32 = 0x01020304;

/// Media SSRC used by the reference APP packet.
pub const TEST_MEDIA_SSRC: u32 = 0x05060708;

/// Installs a test-writer `tracing` subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `rtcpstar=trace` so codec logging is exercised.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rtcpstar=trace"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Creates the reference APP packet (subtype 5, name "TEST") carrying `data`.
pub fn create_app_packet(data: &[u8]) -> ApplicationDefined {
    ApplicationDefined {
        sub_type: 5,
        sender_ssrc: Ssrc::new(TEST_SENDER_SSRC),
        media_ssrc: Ssrc::new(TEST_MEDIA_SSRC),
        name: Bytes::from_static(b"TEST"),
        data: Bytes::copy_from_slice(data),
    }
}

/// Builds raw APP bytes by hand, independent of the codec under test.
///
/// `length_words` is written verbatim into the header length field.
pub fn raw_app_bytes(padding: bool, sub_type: u8, length_words: u16, tail: &[u8]) -> Bytes {
    let mut raw = Vec::with_capacity(16 + tail.len());
    let padding_bit = if padding { 0x20 } else { 0 };
    raw.push(0x80 | padding_bit | sub_type);
    raw.push(204);
    raw.extend_from_slice(&length_words.to_be_bytes());
    raw.extend_from_slice(&TEST_SENDER_SSRC.to_be_bytes());
    raw.extend_from_slice(b"TEST");
    raw.extend_from_slice(&TEST_MEDIA_SSRC.to_be_bytes());
    raw.extend_from_slice(tail);
    Bytes::from(raw)
}
