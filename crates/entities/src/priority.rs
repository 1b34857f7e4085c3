//! Priority level definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Priority of a TodoItem.
///
/// Levels are ordered `Low < Normal < High` and persisted as small integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority.
    #[default]
    Low,
    /// Normal priority.
    Normal,
    /// High priority.
    High,
}

/// Display color associated with a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityColor {
    Green,
    Orange,
    Red,
}

impl PriorityColor {
    /// Returns the lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for PriorityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Priority {
    /// All levels, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Normal, Priority::High];

    /// Converts the level to its stored integer.
    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Low => 0,
            Self::Normal => 1,
            Self::High => 2,
        }
    }

    /// Parses a level from its stored integer.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Self::Low),
            1 => Some(Self::Normal),
            2 => Some(Self::High),
            _ => None,
        }
    }

    /// Returns the display color for this level.
    pub fn color(&self) -> PriorityColor {
        match self {
            Self::Low => PriorityColor::Green,
            Self::Normal => PriorityColor::Orange,
            Self::High => PriorityColor::Red,
        }
    }

    /// Converts the level to a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown priority name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePriorityError(String);

impl fmt::Display for ParsePriorityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown priority '{}' (expected low, normal or high)",
            self.0
        )
    }
}

impl std::error::Error for ParsePriorityError {}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "normal" => Ok(Self::Normal),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_low() {
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(Priority::Low < Priority::Normal);
        assert!(Priority::Normal < Priority::High);
    }

    #[test]
    fn test_raw_values() {
        for priority in Priority::ALL {
            assert_eq!(Priority::from_raw(priority.as_raw()), Some(priority));
        }
        assert_eq!(Priority::Low.as_raw(), 0);
        assert_eq!(Priority::High.as_raw(), 2);
        assert_eq!(Priority::from_raw(3), None);
        assert_eq!(Priority::from_raw(-1), None);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Priority::Low.color(), PriorityColor::Green);
        assert_eq!(Priority::Normal.color(), PriorityColor::Orange);
        assert_eq!(Priority::High.color(), PriorityColor::Red);
        assert_eq!(Priority::Normal.color().to_string(), "orange");
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("Normal".parse::<Priority>(), Ok(Priority::Normal));
        assert!("urgent".parse::<Priority>().is_err());
    }
}
