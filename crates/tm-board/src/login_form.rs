use crate::{BoardResult, LOGIN_FAILED_MESSAGE};

use log::{info, warn};
use tm_client::{Client, ClientError, Session, SessionStore};
use tm_core::{CloseReason, Notification};

const FORBIDDEN: u16 = 403;

/// Login form state. Field values survive a failed attempt so the user can retry.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    loading: bool,
    notification: Notification,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn close_notification(&mut self, reason: CloseReason) -> bool {
        self.notification.close(reason)
    }

    /// Log in and persist the session in `store`.
    ///
    /// Rejected credentials (403) show the server's message. Any other
    /// failure shows a generic message.
    pub async fn submit(&mut self, client: &Client, store: &SessionStore) -> BoardResult<Session> {
        self.loading = true;
        let result = client.login(&self.email, &self.password).await;
        self.loading = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.notification = Notification::error(Self::failure_message(&e));
                warn!("Login failed: {e}");
                return Err(e.into());
            }
        };

        let session = Session::new(response.user);
        if let Err(e) = store.save(&session) {
            warn!("Could not store session: {e}");
            self.notification = Notification::error(e.recovery_hint());
            return Err(e.into());
        }

        info!("Logged in as {}", session.user.name);
        self.notification = Notification::success(format!(
            "{} {}",
            session.user.name, response.message
        ));
        Ok(session)
    }

    fn failure_message(err: &ClientError) -> String {
        match (err.status(), err.server_message()) {
            (Some(FORBIDDEN), Some(message)) => message.to_string(),
            _ => LOGIN_FAILED_MESSAGE.to_string(),
        }
    }
}
