
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tm_client::{ClientError, ClientResult, TaskApi};
use tm_core::{NewTask, Status, Task};

/// In-memory task API. Every write bumps a logical clock so `updated_at`
/// strictly increases in call order.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub tasks: Mutex<Vec<Task>>,
    pub calls: Mutex<Vec<String>>,
    pub fail: AtomicBool,
    clock: AtomicI64,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            clock: AtomicI64::new(100),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        let api = Self::default();
        api.fail.store(true, Ordering::SeqCst);
        api
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClientError::api_error(
                500,
                String::from("HTTP_500"),
                String::from("boom"),
            ));
        }
        Ok(())
    }

    fn tick(&self) -> DateTime<Utc> {
        at_hour(self.clock.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn list_tasks(&self) -> ClientResult<Vec<Task>> {
        self.record(String::from("list"))?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create_task(&self, task: &NewTask) -> ClientResult<Task> {
        self.record(format!("create {}", task.status))?;
        let mut tasks = self.tasks.lock().unwrap();
        let mut created = Task::new(
            tasks.len() as i64 + 1,
            task.title.clone(),
            task.description.clone(),
            task.status,
        );
        created.updated_at = Some(self.tick());
        tasks.push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: i64, status: Status) -> ClientResult<Task> {
        self.record(format!("update {id} {status}"))?;
        let mut tasks = self.tasks.lock().unwrap();
        let stamp = self.tick();
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| {
            ClientError::api_error(404, String::from("NOT_FOUND"), String::from("missing"))
        })?;
        task.status = status;
        task.updated_at = Some(stamp);
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> ClientResult<()> {
        self.record(format!("delete {id}"))?;
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}

pub(crate) fn at_hour(hour: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::hours(hour)
}

pub(crate) fn task(id: i64, status: Status, hour: Option<i64>) -> Task {
    let mut task = Task::new(id, format!("Task {id}"), format!("About {id}"), status);
    task.updated_at = hour.map(at_hour);
    task
}
