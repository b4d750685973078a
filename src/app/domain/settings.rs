use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::app::infrastructure::error::AppError;

pub const DEFAULT_CODE: &str = "9473";
pub const DEFAULT_PROMPT: &str = "ENTER ACCESS CODE";
pub const DEFAULT_RIDDLE: &str = "A heart of ice and veins of steel, many things in me congeal.\n\nOnly when I open up, will secrets be revealed.";
pub const DEFAULT_THEME: &str = "mystery";
pub const DEFAULT_TYPE_SPEED: u64 = 30;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("code pattern is valid"));

/// Horizontal alignment of the revealed riddle text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlignment {
    /// Parse a symbolic alignment name. Unknown names read as `Left`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }

    pub fn all() -> &'static [TextAlignment] {
        &[Self::Left, Self::Center, Self::Right]
    }
}

impl<'de> Deserialize<'de> for TextAlignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// The persisted puzzle configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleSettings {
    #[serde(default = "default_code")]
    pub code: String,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Newlines are rendered as line breaks.
    #[serde(default = "default_riddle")]
    pub riddle: String,

    #[serde(default = "default_theme")]
    pub theme: String,

    /// Milliseconds between two revealed characters.
    #[serde(default = "default_type_speed")]
    pub type_speed: u64,

    #[serde(default)]
    pub alignment: TextAlignment,
}

fn default_code() -> String {
    DEFAULT_CODE.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_riddle() -> String {
    DEFAULT_RIDDLE.to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

fn default_type_speed() -> u64 {
    DEFAULT_TYPE_SPEED
}

impl Default for PuzzleSettings {
    fn default() -> Self {
        Self {
            code: default_code(),
            prompt: default_prompt(),
            riddle: default_riddle(),
            theme: default_theme(),
            type_speed: default_type_speed(),
            alignment: TextAlignment::default(),
        }
    }
}

/// Trim and validate an access code. Exactly four ASCII digits are accepted.
pub fn validate_code(raw: &str) -> Result<String, AppError> {
    let code = raw.trim();
    if CODE_PATTERN.is_match(code) {
        Ok(code.to_string())
    } else {
        Err(AppError::InvalidCode(code.to_string()))
    }
}

/// Parse a typing interval in milliseconds.
///
/// Returns `None` for anything that is not a positive integer; callers fall
/// back to [`DEFAULT_TYPE_SPEED`].
pub fn parse_type_speed(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PuzzleSettings::default();
        assert_eq!(settings.code, "9473");
        assert_eq!(settings.prompt, "ENTER ACCESS CODE");
        assert!(settings.riddle.contains("\n\n"));
        assert_eq!(settings.theme, "mystery");
        assert_eq!(settings.type_speed, 30);
        assert_eq!(settings.alignment, TextAlignment::Left);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&PuzzleSettings::default()).unwrap();
        assert!(json.contains("\"typeSpeed\":30"));
        assert!(json.contains("\"alignment\":\"left\""));
    }

    #[test]
    fn test_partial_record_keeps_defaults() {
        let json = r#"{"code": "1234", "alignment": "center"}"#;
        let settings: PuzzleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.code, "1234");
        assert_eq!(settings.alignment, TextAlignment::Center);
        assert_eq!(settings.prompt, DEFAULT_PROMPT);
        assert_eq!(settings.type_speed, DEFAULT_TYPE_SPEED);
    }

    #[test]
    fn test_unknown_alignment_reads_as_left() {
        let json = r#"{"alignment": "justify"}"#;
        let settings: PuzzleSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.alignment, TextAlignment::Left);
    }

    #[test]
    fn test_validate_code() {
        assert_eq!(validate_code("0000").unwrap(), "0000");
        assert_eq!(validate_code("9999").unwrap(), "9999");
        assert_eq!(validate_code("  4321 ").unwrap(), "4321");

        for bad in ["12a4", "123", "12345", "", "١٢٣٤", "12 4"] {
            assert!(
                matches!(validate_code(bad), Err(AppError::InvalidCode(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_type_speed() {
        assert_eq!(parse_type_speed("45"), Some(45));
        assert_eq!(parse_type_speed(" 10 "), Some(10));
        assert_eq!(parse_type_speed("0"), None);
        assert_eq!(parse_type_speed("-5"), None);
        assert_eq!(parse_type_speed("fast"), None);
        assert_eq!(parse_type_speed(""), None);
    }
}
