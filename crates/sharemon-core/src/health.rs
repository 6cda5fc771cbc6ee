//! Status-code classification.
//!
//! The daemon encodes health as small integer tier codes. Decoding is
//! exhaustive-with-default: codes outside {0,1,2} are not failures, they
//! classify as Unknown and render neutrally.

use serde::Deserialize;

use crate::view::{CellStyle, ViewCell};

/// Semantic health tier decoded from a wire status code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum HealthTier {
    /// Code 0.
    Healthy,
    /// Code 1.
    Degraded,
    /// Code 2.
    Critical,
    /// Any other code, or an absent field.
    #[default]
    Unknown,
}

impl From<i64> for HealthTier {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl HealthTier {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Healthy,
            1 => Self::Degraded,
            2 => Self::Critical,
            _ => Self::Unknown,
        }
    }

    /// Display style for values classified under this tier.
    pub fn style(self) -> CellStyle {
        match self {
            Self::Healthy => CellStyle::Active,
            Self::Degraded => CellStyle::Warning,
            Self::Critical => CellStyle::Critical,
            Self::Unknown => CellStyle::Normal,
        }
    }

    /// Wraps a display value in this tier's style. Unknown tiers pass
    /// the value through unstyled.
    pub fn cell(self, text: String) -> ViewCell {
        ViewCell::styled(text, self.style())
    }
}

/// Overall share worker state. Carries its own display mapping, distinct
/// from the generic tier classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum ShareState {
    /// Code 0.
    Stopped,
    /// Code 1.
    Running,
    /// Code 2.
    Errored,
    /// Any other code, or an absent field.
    #[default]
    Unknown,
}

impl From<i64> for ShareState {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl ShareState {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Stopped,
            1 => Self::Running,
            2 => Self::Errored,
            _ => Self::Unknown,
        }
    }

    /// Status-column text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Errored => "errored",
            Self::Unknown => "unknown",
        }
    }

    /// Status-column style.
    pub fn style(self) -> CellStyle {
        match self {
            Self::Stopped => CellStyle::Dimmed,
            Self::Running => CellStyle::Active,
            Self::Errored => CellStyle::Critical,
            Self::Unknown => CellStyle::Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_from_code() {
        assert_eq!(HealthTier::from_code(0), HealthTier::Healthy);
        assert_eq!(HealthTier::from_code(1), HealthTier::Degraded);
        assert_eq!(HealthTier::from_code(2), HealthTier::Critical);
        assert_eq!(HealthTier::from_code(3), HealthTier::Unknown);
        assert_eq!(HealthTier::from_code(-1), HealthTier::Unknown);
        assert_eq!(HealthTier::from_code(99), HealthTier::Unknown);
    }

    #[test]
    fn test_tier_styles() {
        assert_eq!(HealthTier::Healthy.style(), CellStyle::Active);
        assert_eq!(HealthTier::Degraded.style(), CellStyle::Warning);
        assert_eq!(HealthTier::Critical.style(), CellStyle::Critical);
        assert_eq!(HealthTier::Unknown.style(), CellStyle::Normal);
    }

    #[test]
    fn test_unknown_tier_passes_value_through_unstyled() {
        let cell = HealthTier::from_code(42).cell("4000".to_string());
        assert_eq!(cell.text, "4000");
        assert_eq!(cell.style, CellStyle::Normal);
    }

    #[test]
    fn test_share_state_mapping() {
        assert_eq!(ShareState::from_code(0).label(), "stopped");
        assert_eq!(ShareState::from_code(1).label(), "running");
        assert_eq!(ShareState::from_code(2).label(), "errored");
        assert_eq!(ShareState::from_code(5).label(), "unknown");

        assert_eq!(ShareState::Stopped.style(), CellStyle::Dimmed);
        assert_eq!(ShareState::Running.style(), CellStyle::Active);
        assert_eq!(ShareState::Errored.style(), CellStyle::Critical);
        assert_eq!(ShareState::Unknown.style(), CellStyle::Normal);
    }
}
