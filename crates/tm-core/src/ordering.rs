use crate::{Status, Task};

use std::cmp::Reverse;

/// Most recently updated first. Stable, so equal timestamps keep their
/// current relative order; tasks without a timestamp sink to the end.
pub fn sort_by_updated_desc(tasks: &mut [Task]) {
    tasks.sort_by_key(|task| Reverse(task.updated_at));
}

/// Tasks of one lane, in the order the collection currently holds them.
pub fn tasks_in_lane(tasks: &[Task], status: Status) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.status == status)
        .cloned()
        .collect()
}
