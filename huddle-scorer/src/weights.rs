//! Points awarded per matching attribute.

use serde::{Deserialize, Serialize};

/// Points awarded for each criterion.
///
/// A zero weight disables its criterion; it then contributes neither points
/// nor a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Same declared major.
    pub major: u32,
    /// Same declared minor.
    pub minor: u32,
    /// Same class year.
    pub year: u32,
    /// Per role both members hold.
    pub role: u32,
    /// Same resolved home state.
    pub state: u32,
}

impl MatchWeights {
    /// Weights used by the member directory: major 4, minor 2, year 1,
    /// shared role 2, home state 1.
    pub const DIRECTORY: Self = Self {
        major: 4,
        minor: 2,
        year: 1,
        role: 2,
        state: 1,
    };
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::DIRECTORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let weights: MatchWeights =
            serde_json::from_str(r#"{"major": 10}"#).expect("weights deserialise");
        assert_eq!(
            weights,
            MatchWeights {
                major: 10,
                ..MatchWeights::default()
            }
        );
    }
}
