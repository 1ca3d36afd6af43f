use crate::{CARD_DATE_FORMAT, Status, dates};

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A task as persisted by the remote API.
///
/// The display color is not stored: [`Task::color`] derives it from the status,
/// so it cannot drift after a status change. Any `color` the server sends is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    pub id: i64,

    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,

    pub status: Status,

    #[serde(
        default,
        rename = "startedAt",
        alias = "started_at",
        deserialize_with = "dates::deserialize_date"
    )]
    pub started_at: Option<NaiveDate>,
    #[serde(
        default,
        rename = "endedAt",
        alias = "ended_at",
        deserialize_with = "dates::deserialize_date"
    )]
    pub ended_at: Option<NaiveDate>,

    /// Set by the server on create/update; only used for ordering
    #[serde(
        default,
        rename = "updatedAt",
        alias = "updated_at",
        deserialize_with = "dates::deserialize_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            started_at: None,
            ended_at: None,
            updated_at: None,
        }
    }

    pub fn color(&self) -> &'static str {
        self.status.color()
    }

    /// Card footer text. The end date is only meaningful when a start date exists.
    pub fn date_range_label(&self) -> Option<String> {
        let start = self.started_at?;
        let mut label = start.format(CARD_DATE_FORMAT).to_string();

        if let Some(end) = self.ended_at {
            label.push_str(" -> ");
            label.push_str(&end.format(CARD_DATE_FORMAT).to_string());
        }

        Some(label)
    }
}

impl Serialize for Task {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Task", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("startedAt", &self.started_at)?;
        state.serialize_field("endedAt", &self.ended_at)?;
        state.serialize_field("updatedAt", &self.updated_at)?;
        state.end()
    }
}
