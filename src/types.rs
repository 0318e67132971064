//! Core type definitions for RTCP packets.
//!
//! Provides zero-cost newtypes to prevent field mixups at compile time.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Synchronization Source (SSRC) identifier.
///
/// Identifies either the originator of a control packet or the media stream a
/// control packet is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Ssrc(pub u32);

impl Ssrc {
    /// The zero SSRC.
    pub const INITIAL: Self = Self::new(0);

    /// Creates a new instance
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw value
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the SSRC to big-endian bytes.
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Reads an SSRC from big-endian bytes.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }
}

impl fmt::Display for Ssrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SSRC{}", self.0)
    }
}

impl fmt::LowerHex for Ssrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Deref for Ssrc {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<u32> for Ssrc {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Ssrc> for u32 {
    #[inline]
    fn from(value: Ssrc) -> Self {
        value.0
    }
}

// Enable direct comparisons with raw values
impl PartialEq<u32> for Ssrc {
    #[inline]
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Ssrc> for u32 {
    #[inline]
    fn eq(&self, other: &Ssrc) -> bool {
        *self == other.0
    }
}
