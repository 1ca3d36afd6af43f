use crate::{DraftField, NewTask, Status};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// In-progress values of the open create form.
///
/// Never sent as-is: submitting turns it into a [`NewTask`]. `Draft::default()`
/// is the empty template the form resets to after a successful submit.
/// Serialized in task shape, with the placeholder id, status and color.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
}

impl Draft {
    /// Status of the empty template, before a lane is chosen on submit.
    pub fn status(&self) -> Status {
        Status::Pending
    }

    pub fn color(&self) -> &'static str {
        self.status().color()
    }

    /// Merge a field value. No validation happens here; an empty date clears the field.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::StartedAt => self.started_at = non_empty(value),
            DraftField::EndedAt => self.ended_at = non_empty(value),
        }
    }

    /// Title and description are both required before anything is sent.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }

    pub fn to_new_task(&self, status: Status) -> NewTask {
        let ended_at = if self.started_at.is_some() {
            self.ended_at.clone()
        } else {
            None
        };

        NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            status,
            started_at: self.started_at.clone(),
            ended_at,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

impl Serialize for Draft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Draft", 7)?;
        state.serialize_field("id", &0)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("color", self.color())?;
        state.serialize_field("startedAt", &self.started_at)?;
        state.serialize_field("endedAt", &self.ended_at)?;
        state.end()
    }
}
