//! Tree growth orientation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HyperError;
use crate::hyperbolic::complex::{Complex, EAST, NORTH, SOUTH, WEST, ZERO};

/// Direction in which the tree grows away from its root.
///
/// `Radial` spreads children over the full circle; the compass variants
/// restrict the root's children to a half-plane facing that direction.
///
/// # Example
/// ```
/// use hypertree_core::config::Orientation;
///
/// let o: Orientation = "North".parse().unwrap();
/// assert_eq!(o, Orientation::North);
/// assert_eq!(o.to_string(), "north");
/// assert!("up".parse::<Orientation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Orientation {
    #[default]
    Radial,
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Unit vector of the orientation; `ZERO` for radial.
    pub fn vector(&self) -> Complex {
        match self {
            Orientation::Radial => ZERO,
            Orientation::North => NORTH,
            Orientation::South => SOUTH,
            Orientation::East => EAST,
            Orientation::West => WEST,
        }
    }

    #[inline]
    pub fn is_radial(&self) -> bool {
        matches!(self, Orientation::Radial)
    }

    /// Children are swept clockwise unless the tree grows north or east.
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        !matches!(self, Orientation::North | Orientation::East)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Radial => "radial",
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = HyperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => Ok(Orientation::Radial),
            "north" => Ok(Orientation::North),
            "south" => Ok(Orientation::South),
            "east" => Ok(Orientation::East),
            "west" => Ok(Orientation::West),
            _ => Err(HyperError::InvalidOrientation(s.to_string())),
        }
    }
}

impl TryFrom<String> for Orientation {
    type Error = HyperError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Orientation> for String {
    fn from(orientation: Orientation) -> Self {
        orientation.as_str().to_string()
    }
}
