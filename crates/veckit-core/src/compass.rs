//! Cardinal directions for resize handles.
//!
//! Each of the eight handles around a selection is identified by a
//! cardinal direction. Screen coordinates grow rightwards and
//! downwards, so `n` points towards negative Y.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::vector2::Vector2;

/// One of the eight resize-handle directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardinalDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl CardinalDirection {
    /// All eight directions, cardinals first.
    pub const ALL: [CardinalDirection; 8] = [
        CardinalDirection::N,
        CardinalDirection::S,
        CardinalDirection::E,
        CardinalDirection::W,
        CardinalDirection::NE,
        CardinalDirection::NW,
        CardinalDirection::SE,
        CardinalDirection::SW,
    ];

    /// Unit direction vector used to convert scalar movement into a
    /// per-axis size delta. Diagonals combine both unit components.
    pub fn direction_vector(&self) -> Vector2 {
        match self {
            CardinalDirection::N => Vector2::new(0.0, -1.0),
            CardinalDirection::S => Vector2::new(0.0, 1.0),
            CardinalDirection::E => Vector2::new(1.0, 0.0),
            CardinalDirection::W => Vector2::new(-1.0, 0.0),
            CardinalDirection::NE => Vector2::new(1.0, -1.0),
            CardinalDirection::NW => Vector2::new(-1.0, -1.0),
            CardinalDirection::SE => Vector2::new(1.0, 1.0),
            CardinalDirection::SW => Vector2::new(-1.0, 1.0),
        }
    }

    /// Returns the opposite direction.
    pub fn inverted(&self) -> CardinalDirection {
        match self {
            CardinalDirection::N => CardinalDirection::S,
            CardinalDirection::S => CardinalDirection::N,
            CardinalDirection::E => CardinalDirection::W,
            CardinalDirection::W => CardinalDirection::E,
            CardinalDirection::NE => CardinalDirection::SW,
            CardinalDirection::NW => CardinalDirection::SE,
            CardinalDirection::SE => CardinalDirection::NW,
            CardinalDirection::SW => CardinalDirection::NE,
        }
    }

    /// True if dragging this handle changes the horizontal extent.
    pub fn is_horizontal(&self) -> bool {
        !matches!(self, CardinalDirection::N | CardinalDirection::S)
    }

    /// True if dragging this handle changes the vertical extent.
    pub fn is_vertical(&self) -> bool {
        !matches!(self, CardinalDirection::E | CardinalDirection::W)
    }
}

impl FromStr for CardinalDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(CardinalDirection::N),
            "s" => Ok(CardinalDirection::S),
            "e" => Ok(CardinalDirection::E),
            "w" => Ok(CardinalDirection::W),
            "ne" => Ok(CardinalDirection::NE),
            "nw" => Ok(CardinalDirection::NW),
            "se" => Ok(CardinalDirection::SE),
            "sw" => Ok(CardinalDirection::SW),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CardinalDirection::N => "n",
            CardinalDirection::S => "s",
            CardinalDirection::E => "e",
            CardinalDirection::W => "w",
            CardinalDirection::NE => "ne",
            CardinalDirection::NW => "nw",
            CardinalDirection::SE => "se",
            CardinalDirection::SW => "sw",
        };
        write!(f, "{s}")
    }
}
