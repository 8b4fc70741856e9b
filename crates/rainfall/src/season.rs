//! Cropping seasons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RainfallError;

/// One of the three cropping seasons reported in attribute tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon season, roughly June to October.
    Kharif,
    /// Winter season, roughly October to March.
    Rabi,
    /// Summer season between rabi and kharif.
    Zaid,
}

impl Season {
    /// All seasons in agricultural-year order.
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    /// Lowercase name as used in attribute keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = RainfallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| RainfallError::UnknownSeason {
                name: s.to_string(),
            })
    }
}
