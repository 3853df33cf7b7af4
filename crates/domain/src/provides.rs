use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the provider's upstream variants a client talks to.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProvidesMode {
    /// Recommended service: security blocklist, DNSSEC, no ECS forwarded.
    #[default]
    Default,

    /// Security blocklist, DNSSEC, no ECS forwarded.
    Secured,

    /// No security blocklist, no DNSSEC, no ECS forwarded.
    Unsecured,
}

impl ProvidesMode {
    pub const ALL: [ProvidesMode; 3] = [Self::Default, Self::Secured, Self::Unsecured];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secured => "secured",
            Self::Unsecured => "unsecured",
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Self::Default => 0,
            Self::Secured => 1,
            Self::Unsecured => 2,
        }
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Self::Default),
            1 => Ok(Self::Secured),
            2 => Ok(Self::Unsecured),
            other => Err(DomainError::UnsupportedProvides(other.to_string())),
        }
    }
}

impl fmt::Display for ProvidesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProvidesMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return Self::from_index(index);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "secured" => Ok(Self::Secured),
            "unsecured" => Ok(Self::Unsecured),
            _ => Err(DomainError::UnsupportedProvides(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ProvidesMode {
    type Error = DomainError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
