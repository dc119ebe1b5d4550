//! Risk-profile return assumptions
//!
//! Maps the qualitative investment-approach selection to a pair of annual
//! return rates. The retirement-phase rate is lower than the pre-retirement
//! rate for every named profile, reflecting the more conservative allocation
//! once withdrawals begin.

use serde::{Deserialize, Serialize};

/// Annual return rate pair used by the two projection phases
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRates {
    /// Rate applied while accumulating (before retirement)
    pub pre_retirement: f64,

    /// Rate applied to the remaining balance during retirement
    pub retirement: f64,
}

/// Qualitative investment approach selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Growth,
    /// Caller-supplied rates for both phases
    Custom {
        pre_retirement: f64,
        retirement: f64,
    },
}

impl Default for RiskProfile {
    fn default() -> Self {
        RiskProfile::Balanced
    }
}

impl RiskProfile {
    /// Resolve the profile to its return rate pair
    pub fn resolve(&self) -> ReturnRates {
        match *self {
            RiskProfile::Conservative => ReturnRates {
                pre_retirement: 0.045,
                retirement: 0.035,
            },
            RiskProfile::Balanced => ReturnRates {
                pre_retirement: 0.065,
                retirement: 0.05,
            },
            RiskProfile::Growth => ReturnRates {
                pre_retirement: 0.085,
                retirement: 0.065,
            },
            RiskProfile::Custom {
                pre_retirement,
                retirement,
            } => ReturnRates {
                pre_retirement,
                retirement,
            },
        }
    }

    /// Parse a profile label; unknown labels fall back to Balanced
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "conservative" => RiskProfile::Conservative,
            "balanced" => RiskProfile::Balanced,
            "growth" => RiskProfile::Growth,
            _ => RiskProfile::Balanced,
        }
    }

    /// Short label for output headers
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Balanced => "balanced",
            RiskProfile::Growth => "growth",
            RiskProfile::Custom { .. } => "custom",
        }
    }
}
