//! Tropical cyclone intensity classification
//!
//! Codes follow the six-level scale used for western North Pacific typhoons,
//! ordered by increasing severity so that `Ord` compares strength directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete storm-strength classification
#[allow(clippy::upper_case_acronyms)] // Codes match the agency abbreviations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntensityCode {
    /// Tropical Depression
    TD,
    /// Tropical Storm
    TS,
    /// Severe Tropical Storm
    STS,
    /// Typhoon
    TY,
    /// Severe Typhoon
    STY,
    /// Super Typhoon
    SuperTY,
}

impl IntensityCode {
    /// Every code, weakest first. Legends are drawn in this order.
    pub const ALL: [IntensityCode; 6] = [
        IntensityCode::TD,
        IntensityCode::TS,
        IntensityCode::STS,
        IntensityCode::TY,
        IntensityCode::STY,
        IntensityCode::SuperTY,
    ];

    /// Short code as it appears in track tables
    pub fn code(self) -> &'static str {
        match self {
            IntensityCode::TD => "TD",
            IntensityCode::TS => "TS",
            IntensityCode::STS => "STS",
            IntensityCode::TY => "TY",
            IntensityCode::STY => "STY",
            IntensityCode::SuperTY => "SuperTY",
        }
    }

    /// Full English name
    pub fn full_name(self) -> &'static str {
        match self {
            IntensityCode::TD => "Tropical Depression",
            IntensityCode::TS => "Tropical Storm",
            IntensityCode::STS => "Severe Tropical Storm",
            IntensityCode::TY => "Typhoon",
            IntensityCode::STY => "Severe Typhoon",
            IntensityCode::SuperTY => "Super Typhoon",
        }
    }

    /// Display color as an RGB triple (green for depressions through red for super typhoons)
    pub fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            IntensityCode::TD => (0x1a, 0x98, 0x50),
            IntensityCode::TS => (0x91, 0xcf, 0x60),
            IntensityCode::STS => (0xd9, 0xef, 0x8b),
            IntensityCode::TY => (0xfe, 0xe0, 0x8b),
            IntensityCode::STY => (0xfc, 0x8d, 0x59),
            IntensityCode::SuperTY => (0xd7, 0x30, 0x27),
        }
    }
}

impl fmt::Display for IntensityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Error returned when a short intensity code is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown intensity code '{0}'")]
pub struct UnknownIntensityCode(pub String);

impl FromStr for IntensityCode {
    type Err = UnknownIntensityCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntensityCode::ALL
            .into_iter()
            .find(|code| code.code() == s)
            .ok_or_else(|| UnknownIntensityCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_ordered_by_severity() {
        for pair in IntensityCode::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be weaker than {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for code in IntensityCode::ALL {
            assert_eq!(code.code().parse::<IntensityCode>(), Ok(code));
        }
        assert!("Cat5".parse::<IntensityCode>().is_err());
    }

    #[test]
    fn test_colors() {
        assert_eq!(IntensityCode::TD.color_rgb(), (0x1a, 0x98, 0x50));
        assert_eq!(IntensityCode::SuperTY.color_rgb(), (0xd7, 0x30, 0x27));
        assert_eq!(IntensityCode::STS.full_name(), "Severe Tropical Storm");
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&IntensityCode::SuperTY).unwrap();
        assert_eq!(json, "\"SuperTY\"");
    }
}
