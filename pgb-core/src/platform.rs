//! Build target platforms supported by the service.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PgbError;

/// Target operating system of a build or signing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Blackberry,
    Ios,
}

impl Platform {
    /// Every platform the service builds for.
    pub const ALL: [Platform; 3] = [Platform::Android, Platform::Blackberry, Platform::Ios];

    /// Identifier used in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Blackberry => "blackberry",
            Platform::Ios => "ios",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "android" => Ok(Platform::Android),
            "blackberry" => Ok(Platform::Blackberry),
            "ios" => Ok(Platform::Ios),
            other => Err(PgbError::Parse(format!("unknown platform: {other}"))),
        }
    }
}
