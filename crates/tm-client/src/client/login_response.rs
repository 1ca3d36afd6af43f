use crate::User;

use serde::Deserialize;

/// Successful `POST /api/v1/login` body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    #[serde(default)]
    pub message: String,
}
