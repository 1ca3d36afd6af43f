use crate::{CoreError, CoreResult};

use std::str::FromStr;

/// Editable fields of the create form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Title,
    Description,
    StartedAt,
    EndedAt,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::StartedAt => "startedAt",
            Self::EndedAt => "endedAt",
        }
    }
}

impl FromStr for DraftField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "title" => Ok(Self::Title),
            "description" => Ok(Self::Description),
            "startedAt" | "started_at" => Ok(Self::StartedAt),
            "endedAt" | "ended_at" => Ok(Self::EndedAt),
            _ => Err(CoreError::invalid_draft_field(s)),
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
