use crate::{Client, ClientResult};

use async_trait::async_trait;
use tm_core::{NewTask, Status, Task};

/// Task operations the board needs from the remote API.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Full task collection, in server order
    async fn list_tasks(&self) -> ClientResult<Vec<Task>>;

    /// Persist a new task; the returned task carries the server id and timestamp
    async fn create_task(&self, task: &NewTask) -> ClientResult<Task>;

    /// Move a task to another lane; returns the updated task
    async fn update_status(&self, id: i64, status: Status) -> ClientResult<Task>;

    async fn delete_task(&self, id: i64) -> ClientResult<()>;
}

#[async_trait]
impl TaskApi for Client {
    async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        Client::list_tasks(self).await
    }

    async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        Client::create_task(self, task).await
    }

    async fn update_status(&self, id: i64, status: Status) -> ClientResult<Task> {
        Client::update_status(self, id, status).await
    }

    async fn delete_task(&self, id: i64) -> ClientResult<()> {
        Client::delete_task(self, id).await
    }
}
