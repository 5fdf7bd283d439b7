//! Station, stop, and direction types.

use std::str::FromStr;

/// A named transit location aggregating one or more stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    /// `Station_ID` in the dataset.
    pub id: i64,
    /// Display name, e.g. `Clark/Lake`.
    pub name: String,
}

/// A stop as reported by the line queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stop {
    /// Stop name, e.g. `Jackson (Southbound)`.
    pub name: String,
    /// Whether the stop is ADA accessible.
    pub accessible: bool,
}

impl Stop {
    /// Human readable accessibility label used in listings.
    #[must_use]
    pub const fn accessibility_label(&self) -> &'static str {
        if self.accessible {
            "handicap accessible"
        } else {
            "not handicap accessible"
        }
    }
}

/// Compass direction a stop serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Single-letter code stored in `Stops.Direction`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
