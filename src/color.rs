//! The fixed set of icon color variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A color variant decides which base texture(s) fill an icon.
///
/// - `Blue` and `Red` sample their own texture.
/// - `Traveler` splits the sample between both textures, blue on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorVariant {
    Blue,
    Red,
    Traveler,
}

impl ColorVariant {
    /// All variants in batch processing order.
    pub const ALL: [ColorVariant; 3] = [Self::Blue, Self::Red, Self::Traveler];

    /// Lower-case name, also used as the mask sub-directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Traveler => "traveler",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            "traveler" => Ok(Self::Traveler),
            other => Err(Error::UnknownColor(other.to_string())),
        }
    }
}
