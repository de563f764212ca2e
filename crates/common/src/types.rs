//! Common types for File Station
//!
//! This module defines common value types used throughout the File Station
//! settings system.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Placement of the forward controls in the file browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardLocation {
    /// Controls placed in a bar across the top of the file grid
    Top,
    /// Controls placed along the right edge of the file grid
    Right,
}

impl fmt::Display for ForwardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardLocation::Top => write!(f, "top"),
            ForwardLocation::Right => write!(f, "right"),
        }
    }
}

impl FromStr for ForwardLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(ForwardLocation::Top),
            "right" => Ok(ForwardLocation::Right),
            _ => Err(format!("Unknown forward location: {}", s)),
        }
    }
}

impl Default for ForwardLocation {
    fn default() -> Self {
        ForwardLocation::Right
    }
}

/// Recognized CSS length units, longest first so "rem" wins over "em"
const CSS_UNITS: [&str; 7] = ["rem", "em", "px", "pt", "vw", "vh", "%"];

/// A validated CSS length literal such as "1rem" or "25px"
///
/// The original string is kept verbatim so a serialized settings record
/// round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssLength(String);

impl CssLength {
    /// Gets the length as the original string literal
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CssLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        let unit = CSS_UNITS
            .iter()
            .copied()
            .find(|unit| value.ends_with(unit) && value.len() > unit.len());

        let unit = match unit {
            Some(unit) => unit,
            None => return Err(format!("CSS length without a recognized unit: {:?}", s)),
        };

        let number = &value[..value.len() - unit.len()];
        match number.parse::<f64>() {
            Ok(n) if n.is_finite() && n >= 0.0 => Ok(CssLength(value.to_string())),
            _ => Err(format!("Invalid CSS length: {:?}", s)),
        }
    }
}

impl TryFrom<String> for CssLength {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CssLength> for String {
    fn from(value: CssLength) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_location_from_str() {
        assert_eq!("top".parse::<ForwardLocation>(), Ok(ForwardLocation::Top));
        assert_eq!("right".parse::<ForwardLocation>(), Ok(ForwardLocation::Right));
        assert_eq!("Right".parse::<ForwardLocation>(), Ok(ForwardLocation::Right));
        assert!("left".parse::<ForwardLocation>().is_err());
        assert!("".parse::<ForwardLocation>().is_err());
    }

    #[test]
    fn test_forward_location_display() {
        assert_eq!(ForwardLocation::Top.to_string(), "top");
        assert_eq!(ForwardLocation::Right.to_string(), "right");
    }

    #[test]
    fn test_forward_location_default() {
        assert_eq!(ForwardLocation::default(), ForwardLocation::Right);
    }

    #[test]
    fn test_forward_location_serde() {
        assert_eq!(
            serde_json::from_str::<ForwardLocation>("\"top\"").unwrap(),
            ForwardLocation::Top
        );
        assert_eq!(
            serde_json::to_string(&ForwardLocation::Right).unwrap(),
            "\"right\""
        );
        // Only the documented literal set is accepted
        assert!(serde_json::from_str::<ForwardLocation>("\"bottom\"").is_err());
        assert!(serde_json::from_str::<ForwardLocation>("\"Top\"").is_err());
    }

    #[test]
    fn test_css_length_valid() {
        for value in ["1rem", "25px", "16px", "0.5em", "12pt", "50%", "10vw", "10vh"] {
            let length = value.parse::<CssLength>().unwrap();
            assert_eq!(length.as_str(), value);
            assert_eq!(length.to_string(), value);
        }
    }

    #[test]
    fn test_css_length_invalid() {
        for value in ["", "px", "1", "-1px", "1 px", "abcpx", "1foo", "1px 2px"] {
            assert!(value.parse::<CssLength>().is_err(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_css_length_rem_is_not_em() {
        // "1rem" must parse as rem, not as "1r" + "em"
        assert!("1rem".parse::<CssLength>().is_ok());
        assert!("1r".parse::<CssLength>().is_err());
    }

    #[test]
    fn test_css_length_serde() {
        let length: CssLength = serde_json::from_str("\"1rem\"").unwrap();
        assert_eq!(length.as_str(), "1rem");
        assert_eq!(serde_json::to_string(&length).unwrap(), "\"1rem\"");
        assert!(serde_json::from_str::<CssLength>("\"huge\"").is_err());
    }
}
