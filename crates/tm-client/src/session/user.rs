use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record returned by login and kept for authenticated calls.
///
/// Fields this client does not use are preserved so the stored record
/// matches what the server sent.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub auth_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("auth_token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
