use crate::User;

/// Explicit authentication context handed to whatever issues API requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn bearer_token(&self) -> &str {
        &self.user.auth_token
    }
}
