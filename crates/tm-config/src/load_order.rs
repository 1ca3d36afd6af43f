use std::str::FromStr;

use serde::Deserialize;

/// How the collection returned by the initial load is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LoadOrder {
    /// Server order, reversed
    #[default]
    Reverse,
    /// Most recently updated first
    UpdatedDesc,
}

impl LoadOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::UpdatedDesc => "updated_desc",
        }
    }
}

impl FromStr for LoadOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reverse" => Ok(Self::Reverse),
            "updated_desc" => Ok(Self::UpdatedDesc),
            _ => Err(()),
        }
    }
}
