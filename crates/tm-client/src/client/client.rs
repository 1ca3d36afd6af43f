use crate::client::envelope::DataEnvelope;
use crate::{ClientError, ClientResult, LoginResponse, Session};

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tm_core::{NewTask, Status, StatusCommand, Task};

const TASKS_PATH: &str = "/api/v1/tasks";
const LOGIN_PATH: &str = "/api/v1/login";

/// HTTP client for the task REST API
pub struct Client {
    pub base_url: String,
    session: Option<Session>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `session` - Logged-in session whose token is sent as a bearer credential
    pub fn new(base_url: &str, session: Option<Session>) -> Self {
        Self::from_parts(base_url, session, ReqwestClient::new())
    }

    /// Create a client whose requests give up after `timeout`
    pub fn with_timeout(
        base_url: &str,
        session: Option<Session>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self::from_parts(base_url, session, client))
    }

    fn from_parts(base_url: &str, session: Option<Session>, client: ReqwestClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn set_session(&mut self, session: Option<Session>) {
        self.session = session;
    }

    /// Build a request, attaching the bearer token when a session is held
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let req = self.anonymous_request(method, path);

        match self.session {
            Some(ref session) => req.bearer_auth(session.bearer_token()),
            None => req,
        }
    }

    fn anonymous_request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute request and turn non-success responses into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else if status.is_success() {
            serde_json::from_str(&text)?
        } else {
            // Error pages are not always JSON
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        if !status.is_success() {
            let (code, message) = Self::error_details(status.as_u16(), &body);
            debug!("API error {}: {} ({})", status.as_u16(), message, code);
            return Err(ClientError::api_error(status.as_u16(), code, message));
        }

        Ok(body)
    }

    /// Understands `{error: {code, message}}` and `{message}` bodies
    fn error_details(status: u16, body: &Value) -> (String, String) {
        let error = body.get("error");

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP_{status}"));

        let message = error
            .and_then(|e| e.get("message"))
            .or_else(|| body.get("message"))
            .and_then(|v| v.as_str())
            .or_else(|| body.as_str())
            .unwrap_or("Unknown error")
            .to_string();

        (code, message)
    }

    /// Execute and unwrap the `data` member of the response
    async fn execute_data<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
        path: &str,
    ) -> ClientResult<T> {
        let body = self.execute(req).await?;
        let envelope: DataEnvelope<T> = serde_json::from_value(body)?;

        envelope.data.ok_or_else(|| ClientError::missing_data(path))
    }

    // =========================================================================
    // Task Operations
    // =========================================================================

    /// List all tasks, in server order.
    ///
    /// Rows are parsed one at a time. Tasks the server keeps with the
    /// `delete` command as their status, and rows that are not valid tasks,
    /// are skipped so one bad row cannot hide the whole board.
    pub async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        let req = self.request(Method::GET, TASKS_PATH);
        let rows: Vec<Value> = self.execute_data(req, TASKS_PATH).await?;

        Ok(rows.into_iter().filter_map(Self::parse_task_row).collect())
    }

    fn parse_task_row(row: Value) -> Option<Task> {
        let id = row.get("id").cloned().unwrap_or(Value::Null);

        if row.get("status").and_then(Value::as_str) == Some(StatusCommand::DELETE_STR) {
            warn!("Skipping task {id}: it was deleted");
            return None;
        }

        match serde_json::from_value::<Task>(row) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!("Skipping task {id}: {e}");
                None
            }
        }
    }

    /// Create a task
    pub async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        let req = self.request(Method::POST, TASKS_PATH).json(task);
        self.execute_data(req, TASKS_PATH).await
    }

    /// Move a task to another lane
    pub async fn update_status(&self, id: i64, status: Status) -> ClientResult<Task> {
        let path = format!("{TASKS_PATH}/{id}");
        let req = self
            .request(Method::PUT, &path)
            .json(&StatusRequest {
                status: status.as_str(),
            });
        self.execute_data(req, &path).await
    }

    /// Delete a task. The API takes deletion as the `delete` status command;
    /// whatever it echoes back is ignored.
    pub async fn delete_task(&self, id: i64) -> ClientResult<()> {
        let path = format!("{TASKS_PATH}/{id}");
        let req = self
            .request(Method::PUT, &path)
            .json(&StatusRequest {
                status: StatusCommand::Delete.as_str(),
            });
        self.execute(req).await?;
        Ok(())
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a user record carrying a bearer token.
    ///
    /// Invalid credentials come back as `ClientError::Api` with status 403 and
    /// the server's message.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .anonymous_request(Method::POST, LOGIN_PATH)
            .json(&LoginRequest { email, password });
        let body = self.execute(req).await?;

        if body.is_null() {
            warn!("Login succeeded with an empty body");
            return Err(ClientError::missing_data(LOGIN_PATH));
        }

        Ok(serde_json::from_value(body)?)
    }
}

#[derive(Serialize)]
struct StatusRequest<'a> {
    status: &'a str,
}
