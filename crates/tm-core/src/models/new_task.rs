use crate::Status;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Create request body built from a submitted draft.
///
/// The API reads the dates from `date_start`/`date_end`; the camelCase copies
/// are kept so the body mirrors the task shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
}

impl NewTask {
    pub fn color(&self) -> &'static str {
        self.status.color()
    }
}

impl Serialize for NewTask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("NewTask", 9)?;
        state.serialize_field("id", &0)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("startedAt", &self.started_at)?;
        state.serialize_field("endedAt", &self.ended_at)?;
        state.serialize_field("date_start", &self.started_at)?;
        state.serialize_field("date_end", &self.ended_at)?;
        state.end()
    }
}
