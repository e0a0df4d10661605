// File: src/config.rs
use crate::core::types::{MessageBackground, MessagePosition, VariableId};
use crate::error::ConfigError;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Plugin parameters exactly as the host hands them over.
/// Every key is optional and falls back to the plugin's default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RawParameters {
    #[serde(rename = "Source variable")]
    pub source_variable: VariableId,
    #[serde(rename = "Decode Rate")]
    pub rate_variable: VariableId,
    #[serde(rename = "Output line length")]
    pub line_width: usize,
    #[serde(rename = "Coded text color")]
    pub coded_color: u32,
    #[serde(rename = "Decoded text color")]
    pub decoded_color: u32,
    #[serde(rename = "Decoded Message Position")]
    pub position: String,
    #[serde(rename = "Decoded Message Background")]
    pub background: String,
    #[serde(rename = "Additional non-decode characters")]
    pub extra_non_decode: String,
}

impl Default for RawParameters {
    fn default() -> Self {
        Self {
            source_variable: 1,
            rate_variable: 3,
            line_width: 50,
            coded_color: 5,
            decoded_color: 0,
            position: "Middle".to_string(),
            background: "Transparent".to_string(),
            extra_non_decode: String::new(),
        }
    }
}

impl FromStr for MessagePosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Top" => Ok(MessagePosition::Top),
            "Middle" => Ok(MessagePosition::Middle),
            "Bottom" => Ok(MessagePosition::Bottom),
            other => Err(ConfigError::UnknownPosition(other.to_string())),
        }
    }
}

impl FromStr for MessageBackground {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Opaque" => Ok(MessageBackground::Opaque),
            "Transparent" => Ok(MessageBackground::Transparent),
            "Invisible" => Ok(MessageBackground::Invisible),
            other => Err(ConfigError::UnknownBackground(other.to_string())),
        }
    }
}

/// Validated decoder settings. Built once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    pub source_variable: VariableId,
    pub rate_variable: VariableId,
    pub line_width: usize,
    pub coded_color: u32,
    pub decoded_color: u32,
    pub position: MessagePosition,
    pub background: MessageBackground,
    /// Characters left untouched on top of the built-in punctuation set.
    pub extra_non_decode: BTreeSet<char>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            source_variable: 1,
            rate_variable: 3,
            line_width: 50,
            coded_color: 5,
            decoded_color: 0,
            position: MessagePosition::Middle,
            background: MessageBackground::Transparent,
            extra_non_decode: BTreeSet::new(),
        }
    }
}

impl DecoderConfig {
    pub fn from_parameters(raw: RawParameters) -> Result<Self, ConfigError> {
        if raw.line_width == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }

        Ok(Self {
            source_variable: raw.source_variable,
            rate_variable: raw.rate_variable,
            line_width: raw.line_width,
            coded_color: raw.coded_color,
            decoded_color: raw.decoded_color,
            position: raw.position.trim().parse()?,
            background: raw.background.trim().parse()?,
            extra_non_decode: parse_non_decode_list(&raw.extra_non_decode)?,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawParameters = serde_json::from_str(json)?;
        Self::from_parameters(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

/// Parses a comma-separated list such as `"-, \", :"`. Entries are trimmed and
/// blank ones skipped, so a literal comma or space cannot be listed (both are
/// already in the built-in set).
fn parse_non_decode_list(list: &str) -> Result<BTreeSet<char>, ConfigError> {
    let mut set = BTreeSet::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let mut chars = entry.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                set.insert(c);
            }
            _ => return Err(ConfigError::InvalidNonDecodeCharacter(entry.to_string())),
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = DecoderConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }

    #[test]
    fn test_full_document() {
        let json = r#"{
            "Source variable": 7,
            "Decode Rate": 8,
            "Output line length": 30,
            "Coded text color": 2,
            "Decoded text color": 17,
            "Decoded Message Position": "Bottom",
            "Decoded Message Background": "Opaque",
            "Additional non-decode characters": " - , \" ,:"
        }"#;
        let config = DecoderConfig::from_json_str(json).unwrap();
        assert_eq!(config.source_variable, 7);
        assert_eq!(config.rate_variable, 8);
        assert_eq!(config.line_width, 30);
        assert_eq!(config.coded_color, 2);
        assert_eq!(config.decoded_color, 17);
        assert_eq!(config.position, MessagePosition::Bottom);
        assert_eq!(config.background, MessageBackground::Opaque);
        let expected: BTreeSet<char> = ['-', '"', ':'].into_iter().collect();
        assert_eq!(config.extra_non_decode, expected);
    }

    #[test]
    fn test_unknown_position_fails_fast() {
        let err = DecoderConfig::from_json_str(r#"{"Decoded Message Position": "Left"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPosition(ref p) if p == "Left"));
    }

    #[test]
    fn test_unknown_background_fails_fast() {
        let err = DecoderConfig::from_json_str(r#"{"Decoded Message Background": "Dim"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBackground(_)));
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = DecoderConfig::from_json_str(r#"{"Output line length": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroLineWidth));
    }

    #[test]
    fn test_multi_character_entry_rejected() {
        let err = DecoderConfig::from_json_str(r#"{"Additional non-decode characters": "-, th"}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNonDecodeCharacter(ref e) if e == "th"));
    }

    #[test]
    fn test_malformed_json() {
        let err = DecoderConfig::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
