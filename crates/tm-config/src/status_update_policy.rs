use std::str::FromStr;

use serde::Deserialize;

/// When a status change is applied to the local collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusUpdatePolicy {
    /// Wait for the echoed task, replace it in place and re-sort
    #[default]
    ServerConfirmed,
    /// Apply the requested status immediately, before the response arrives
    Optimistic,
}

impl StatusUpdatePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServerConfirmed => "server_confirmed",
            Self::Optimistic => "optimistic",
        }
    }
}

impl FromStr for StatusUpdatePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "server_confirmed" => Ok(Self::ServerConfirmed),
            "optimistic" => Ok(Self::Optimistic),
            _ => Err(()),
        }
    }
}
