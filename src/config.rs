//! Options that govern how editor state becomes a [`Run`](crate::Run)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Result, SplitsError};

/// Segment name used when a row has no name cell.
pub const DEFAULT_PLACEHOLDER_NAME: &str = "-";

/// How a non-blank, non-numeric attempts count is handled when building a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum AttemptsPolicy {
    /// Reject the text with [`SplitsError::InvalidAttemptsCount`]
    #[default]
    Strict,

    /// Treat the text as zero attempts and log a warning
    ClampToZero,
}

impl AttemptsPolicy {
    /// Resolve attempts count text into a number.
    ///
    /// Blank or whitespace-only text is zero attempts under every policy. Other text
    /// is trimmed and read as a non-negative integer.
    pub fn resolve(self, text: &str) -> Result<u32> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }

        match trimmed.parse::<u32>() {
            Ok(count) => Ok(count),
            Err(source) => match self {
                AttemptsPolicy::Strict => Err(SplitsError::invalid_attempts_count(text, source)),
                AttemptsPolicy::ClampToZero => {
                    warn!(text, error = %source, "Unreadable attempts count, using 0");
                    Ok(0)
                }
            },
        }
    }
}

/// Run building options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct EditorConfig {
    /// Handling of unreadable attempts counts
    pub attempts_policy: AttemptsPolicy,
    /// Name given to segments whose name cell is absent
    pub placeholder_name: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            attempts_policy: AttemptsPolicy::Strict,
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
        }
    }
}

impl EditorConfig {
    /// Config that clamps unreadable attempts counts to zero
    pub fn lenient() -> Self {
        Self { attempts_policy: AttemptsPolicy::ClampToZero, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_zero_for_every_policy() {
        for policy in [AttemptsPolicy::Strict, AttemptsPolicy::ClampToZero] {
            assert_eq!(policy.resolve(""), Ok(0));
            assert_eq!(policy.resolve("   \t"), Ok(0));
        }
    }

    #[test]
    fn numeric_text_is_trimmed_and_parsed() {
        assert_eq!(AttemptsPolicy::Strict.resolve("42"), Ok(42));
        assert_eq!(AttemptsPolicy::Strict.resolve(" 7 "), Ok(7));
    }

    #[test]
    fn strict_policy_rejects_unreadable_text() {
        let error = AttemptsPolicy::Strict.resolve("many").unwrap_err();
        assert!(matches!(error, SplitsError::InvalidAttemptsCount { ref text, .. } if text == "many"));

        // Negative counts are not attempts counts
        assert!(AttemptsPolicy::Strict.resolve("-3").is_err());
    }

    #[test]
    fn clamp_policy_turns_unreadable_text_into_zero() {
        assert_eq!(AttemptsPolicy::ClampToZero.resolve("many"), Ok(0));
        assert_eq!(AttemptsPolicy::ClampToZero.resolve("-3"), Ok(0));
        assert_eq!(AttemptsPolicy::ClampToZero.resolve("12"), Ok(12));
    }

    #[test]
    fn default_config_is_strict_with_dash_placeholder() {
        let config = EditorConfig::default();
        assert_eq!(config.attempts_policy, AttemptsPolicy::Strict);
        assert_eq!(config.placeholder_name, "-");
        assert_eq!(EditorConfig::lenient().attempts_policy, AttemptsPolicy::ClampToZero);
    }
}
