use crate::{
    BoardError, BoardPolicy, BoardResult, BoardState, CREATE_FAILED_MESSAGE, CREATED_MESSAGE,
    DELETED_MESSAGE, LOAD_FAILED_MESSAGE, LaneView, UPDATE_FAILED_MESSAGE,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use tm_client::TaskApi;
use tm_config::{LoadOrder, StatusUpdatePolicy};
use tm_core::{
    CloseReason, Draft, DraftField, LANES, Notification, Status, StatusCommand, Task,
    sort_by_updated_desc, tasks_in_lane,
};

/// Owns the task collection, the open create form and the current
/// notification, and mediates every read and write against the task API.
///
/// The state lock is only ever taken between awaits. Two operations racing
/// on the same task are not coordinated: whichever response lands last
/// decides the local copy.
pub struct TaskBoard<A: TaskApi> {
    api: A,
    policy: BoardPolicy,
    state: Mutex<BoardState>,
    mounted: AtomicBool,
}

impl<A: TaskApi> TaskBoard<A> {
    pub fn new(api: A, policy: BoardPolicy) -> Self {
        Self {
            api,
            policy,
            state: Mutex::new(BoardState::default()),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn policy(&self) -> &BoardPolicy {
        &self.policy
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        // Nothing panics while holding the lock, but a poisoned board is
        // still consistent enough to read.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Initial load. Only the first call per board does anything; returns
    /// whether this call performed the load.
    pub async fn mount(&self) -> BoardResult<bool> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            debug!("Board already mounted, skipping load");
            return Ok(false);
        }

        self.load().await?;
        Ok(true)
    }

    /// Replace the collection with the server's. On failure the current
    /// collection is kept.
    pub async fn load(&self) -> BoardResult<usize> {
        match self.api.list_tasks().await {
            Ok(mut tasks) => {
                match self.policy.load_order {
                    LoadOrder::Reverse => tasks.reverse(),
                    LoadOrder::UpdatedDesc => sort_by_updated_desc(&mut tasks),
                }

                let count = tasks.len();
                self.state().tasks = tasks;
                info!("Loaded {count} tasks");
                Ok(count)
            }
            Err(e) => {
                warn!("Failed to load tasks: {e}");
                if self.policy.notify_on_load_failure {
                    self.state().notification = Notification::error(LOAD_FAILED_MESSAGE);
                }
                Err(e.into())
            }
        }
    }

    pub fn select_lane(&self, lane: Status) {
        self.state().selected_lane = lane;
    }

    pub fn update_draft_field(&self, field: DraftField, value: impl Into<String>) {
        self.state().draft.set(field, value);
    }

    /// Create a task in `lane` from the draft.
    ///
    /// Returns `Ok(None)` without contacting the server when title or
    /// description is empty. A failed request keeps the draft for a retry.
    pub async fn submit_draft(&self, lane: Status) -> BoardResult<Option<Task>> {
        let candidate = {
            let mut state = self.state();
            if !state.draft.is_submittable() {
                debug!("Draft incomplete, nothing submitted");
                return Ok(None);
            }
            state.saving = true;
            state.draft.to_new_task(lane)
        };

        let result = self.api.create_task(&candidate).await;

        let mut state = self.state();
        state.saving = false;

        match result {
            Ok(task) => {
                info!("Created task {} in {}", task.id, task.status);
                state.tasks.push(task.clone());
                sort_by_updated_desc(&mut state.tasks);
                state.draft.reset();
                state.notification = Notification::success(CREATED_MESSAGE);
                Ok(Some(task))
            }
            Err(e) => {
                warn!("Failed to create task: {e}");
                if self.policy.notify_on_write_failure {
                    state.notification = Notification::error(CREATE_FAILED_MESSAGE);
                }
                Err(e.into())
            }
        }
    }

    /// Apply a status-menu choice to task `id`.
    pub async fn change_status(&self, id: i64, command: StatusCommand) -> BoardResult<()> {
        match command {
            StatusCommand::Delete => self.delete_task(id).await,
            StatusCommand::Change(status) => match self.policy.status_update {
                StatusUpdatePolicy::ServerConfirmed => self.update_confirmed(id, status).await,
                StatusUpdatePolicy::Optimistic => self.update_optimistic(id, status).await,
            },
        }
    }

    async fn update_confirmed(&self, id: i64, status: Status) -> BoardResult<()> {
        let result = self.api.update_status(id, status).await;

        match result {
            Ok(updated) => {
                let mut state = self.state();
                match state.tasks.iter_mut().find(|t| t.id == updated.id) {
                    Some(slot) => *slot = updated,
                    None => debug!("Task {id} updated but no longer on the board"),
                }
                sort_by_updated_desc(&mut state.tasks);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to update task {id}: {e}");
                self.notify_write_failure();
                Err(e.into())
            }
        }
    }

    async fn update_optimistic(&self, id: i64, status: Status) -> BoardResult<()> {
        let previous = {
            let mut state = self.state();
            let task = state
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| BoardError::task_not_found(id))?;
            std::mem::replace(&mut task.status, status)
        };

        if let Err(e) = self.api.update_status(id, status).await {
            warn!("Failed to update task {id}, restoring {previous}: {e}");
            {
                let mut state = self.state();
                // A later change may already have moved the task again
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id)
                    && task.status == status
                {
                    task.status = previous;
                }
            }
            self.notify_write_failure();
            return Err(e.into());
        }

        Ok(())
    }

    async fn delete_task(&self, id: i64) -> BoardResult<()> {
        {
            let mut state = self.state();
            let before = state.tasks.len();
            state.tasks.retain(|t| t.id != id);
            if state.tasks.len() == before {
                debug!("Task {id} was not on the board");
            }
            state.notification = Notification::new(self.policy.delete_severity, DELETED_MESSAGE);
        }

        if let Err(e) = self.api.delete_task(id).await {
            warn!("Delete request for task {id} failed: {e}");
            return Err(e.into());
        }

        info!("Deleted task {id}");
        Ok(())
    }

    fn notify_write_failure(&self) {
        if self.policy.notify_on_write_failure {
            self.state().notification = Notification::error(UPDATE_FAILED_MESSAGE);
        }
    }

    /// Returns whether the notification closed; click-aways are ignored.
    pub fn close_notification(&self, reason: CloseReason) -> bool {
        self.state().notification.close(reason)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn tasks(&self) -> Vec<Task> {
        self.state().tasks.clone()
    }

    pub fn lane_tasks(&self, lane: Status) -> Vec<Task> {
        tasks_in_lane(&self.state().tasks, lane)
    }

    /// Every lane in display order
    pub fn lanes(&self) -> Vec<LaneView> {
        let state = self.state();
        LANES
            .iter()
            .map(|spec| LaneView {
                spec: *spec,
                selected: spec.status == state.selected_lane,
                tasks: tasks_in_lane(&state.tasks, spec.status),
            })
            .collect()
    }

    pub fn draft(&self) -> Draft {
        self.state().draft.clone()
    }

    pub fn selected_lane(&self) -> Status {
        self.state().selected_lane
    }

    pub fn notification(&self) -> Notification {
        self.state().notification.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.state().saving
    }

    pub fn snapshot(&self) -> BoardState {
        self.state().clone()
    }
}
