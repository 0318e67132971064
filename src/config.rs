//! Decode-time configuration.
//!
//! Parsing is lax by default: only the final padding byte is read, as a count.
//! Callers that need strict RFC 3550 padding checks opt in through
//! [`DecodeConfig`].

use serde::{Deserialize, Serialize};

/// How trailing padding is validated when the header's padding flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingValidation {
    /// Only checks that the final byte's count fits in the payload area.
    #[default]
    Lax,
    /// Additionally requires a non-zero count and every padding byte equal to it.
    Strict,
}

/// Options controlling packet decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Padding validation policy.
    #[serde(default)]
    pub padding_validation: PaddingValidation,
}

impl DecodeConfig {
    /// Configuration with strict padding validation.
    pub const fn strict() -> Self {
        Self {
            padding_validation: PaddingValidation::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_lax() {
        assert_eq!(
            DecodeConfig::default().padding_validation,
            PaddingValidation::Lax
        );
    }

    #[test]
    fn config_deserializes_with_missing_fields() {
        let config: DecodeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecodeConfig::default());

        let config: DecodeConfig =
            serde_json::from_str(r#"{"padding_validation":"strict"}"#).unwrap();
        assert_eq!(config, DecodeConfig::strict());
    }
}
