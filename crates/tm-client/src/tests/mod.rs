
use crate::{Session, User};

use serde_json::Map;

pub(crate) fn sample_session() -> Session {
    Session::new(User {
        id: Some(5),
        name: String::from("Ada"),
        email: Some(String::from("ada@example.test")),
        auth_token: String::from("secret-token"),
        extra: Map::new(),
    })
}
