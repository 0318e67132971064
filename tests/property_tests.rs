//! Property-based tests for the APP packet codec.
//!
//! Uses QuickCheck to generate random packets and raw inputs and verifies the
//! size, alignment, round-trip and rejection invariants of the wire format.

use bytes::Bytes;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck as qc_quickcheck;
use rtcpstar::application_defined::padding_size;
use rtcpstar::constants::APP_FIXED_LENGTH_BYTES;
use rtcpstar::{ApplicationDefined, Packet, RtcpBuildingError, RtcpParsingError, Ssrc};

fn app_packet(
    sub_type: u8,
    sender: u32,
    media: u32,
    name: u32,
    data: Vec<u8>,
) -> ApplicationDefined {
    ApplicationDefined {
        sub_type: sub_type % 32,
        sender_ssrc: Ssrc::new(sender),
        media_ssrc: Ssrc::new(media),
        name: Bytes::copy_from_slice(&name.to_be_bytes()),
        data: Bytes::from(data),
    }
}

/// Property: unmarshal(marshal(p)) reproduces p field for field.
#[qc_quickcheck]
fn app_roundtrip_preserves_fields(
    sub_type: u8,
    sender: u32,
    media: u32,
    name: u32,
    data: Vec<u8>,
) -> bool {
    let packet = app_packet(sub_type, sender, media, name, data);
    let raw = match packet.marshal() {
        Ok(raw) => raw,
        Err(_) => return false,
    };
    ApplicationDefined::unmarshal(&raw) == Ok(packet)
}

/// Property: marshalled length always equals marshal_size and is word aligned.
#[qc_quickcheck]
fn app_marshal_size_matches_output(data: Vec<u8>) -> bool {
    let packet = app_packet(1, 2, 3, 4, data);
    let size = packet.marshal_size();
    let raw = packet.marshal().unwrap();
    raw.len() == size
        && size % 4 == 0
        && size == APP_FIXED_LENGTH_BYTES + packet.data.len() + packet.padding_size()
}

/// Property: padding is always 0-3 bytes and completes a 32-bit word.
#[qc_quickcheck]
fn app_padding_completes_word(data_len: usize) -> bool {
    let data_len = data_len % 0x10000;
    let padding = padding_size(data_len);
    padding < 4 && (data_len + padding) % 4 == 0
}

/// Property: any name that is not exactly four bytes is rejected.
#[qc_quickcheck]
fn app_name_length_other_than_four_rejected(name: Vec<u8>) -> TestResult {
    if name.len() == 4 {
        return TestResult::discard();
    }
    let packet = ApplicationDefined {
        name: Bytes::from(name.clone()),
        ..app_packet(0, 0, 0, 0, vec![])
    };
    TestResult::from_bool(
        packet.marshal() == Err(RtcpBuildingError::InvalidName { len: name.len() }),
    )
}

/// Property: inputs shorter than the fixed fields never decode.
#[qc_quickcheck]
fn app_short_input_rejected(raw: Vec<u8>) -> bool {
    let raw: Vec<u8> = raw.into_iter().take(APP_FIXED_LENGTH_BYTES - 1).collect();
    ApplicationDefined::unmarshal_slice(&raw).is_err()
}

/// Property: a header length that disagrees with the input size is rejected.
#[qc_quickcheck]
fn app_length_mismatch_rejected(data: Vec<u8>, declared_words: u16) -> TestResult {
    let raw = app_packet(0, 1, 2, 3, data).marshal().unwrap().to_vec();
    if (declared_words as usize + 1) * 4 == raw.len() {
        return TestResult::discard();
    }
    let mut raw = raw;
    raw[2..4].copy_from_slice(&declared_words.to_be_bytes());
    TestResult::from_bool(matches!(
        ApplicationDefined::unmarshal_slice(&raw),
        Err(RtcpParsingError::InvalidLength { .. })
    ))
}

/// Property: a padding count above the payload size is rejected.
#[qc_quickcheck]
fn app_padding_beyond_payload_rejected(words: u8, count: u8) -> TestResult {
    let payload_len = (words as usize % 16) * 4 + 4;
    if (count as usize) <= payload_len {
        return TestResult::discard();
    }
    let mut packet = app_packet(0, 1, 2, 3, vec![0; payload_len])
        .marshal()
        .unwrap()
        .to_vec();
    packet[0] |= 0x20;
    let last = packet.len() - 1;
    packet[last] = count;
    TestResult::from_bool(
        ApplicationDefined::unmarshal_slice(&packet)
            == Err(RtcpParsingError::WrongPadding {
                padding: count as usize,
                available: payload_len,
            }),
    )
}

/// Property: decoding arbitrary bytes never panics.
#[qc_quickcheck]
fn app_unmarshal_arbitrary_input_never_panics(raw: Vec<u8>) -> bool {
    let _ = ApplicationDefined::unmarshal_slice(&raw);
    true
}
