//! Task board state and the commands that keep it in step with the remote API.

mod board_policy;
mod board_state;
mod error;
mod lane_view;
mod login_form;
mod task_board;

#[cfg(test)]
mod tests;

pub use board_policy::BoardPolicy;
pub use board_state::BoardState;
pub use error::{BoardError, Result as BoardResult};
pub use lane_view::LaneView;
pub use login_form::LoginForm;
pub use task_board::TaskBoard;

pub const CREATED_MESSAGE: &str = "Task successfully created.";
pub const DELETED_MESSAGE: &str = "Task successfully deleted.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load tasks.";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create task.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update task.";
pub const LOGIN_FAILED_MESSAGE: &str = "Unable to log in. Please try again.";
