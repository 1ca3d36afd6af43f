//! Text and JSON rendering of command results.

use crate::CliResult;

use std::fmt::Write;

use serde::Serialize;
use tm_board::LaneView;
use tm_core::{Notification, Task};

/// What a command produced
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Lanes(Vec<LaneView>),
    Tasks(Vec<Task>),
    Task(Option<Task>),
    Message { message: String },
}

impl Output {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json { pretty: bool },
}

pub fn render(output: &Output, format: Format) -> CliResult<String> {
    match format {
        Format::Json { pretty: true } => Ok(serde_json::to_string_pretty(output)?),
        Format::Json { pretty: false } => Ok(serde_json::to_string(output)?),
        Format::Text => Ok(render_text(output)),
    }
}

fn render_text(output: &Output) -> String {
    match output {
        Output::Lanes(lanes) => render_lanes(lanes),
        Output::Tasks(tasks) => tasks
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Task(Some(task)) => render_card(task),
        Output::Task(None) => String::from("Nothing changed."),
        Output::Message { message } => message.clone(),
    }
}

/// One header per lane followed by its cards, indented.
pub fn render_lanes(lanes: &[LaneView]) -> String {
    let mut out = String::new();

    for lane in lanes {
        let _ = writeln!(out, "{}", lane.title());
        for task in &lane.tasks {
            let _ = writeln!(out, "  {}", render_card(task));
        }
    }

    out.trim_end().to_string()
}

/// `#id [Label] title: description (dates)`
pub fn render_card(task: &Task) -> String {
    let mut line = format!(
        "#{} [{}] {}: {}",
        task.id,
        task.status.label(),
        task.title,
        task.description
    );

    if let Some(dates) = task.date_range_label() {
        let _ = write!(line, " ({dates})");
    }

    line
}

/// Notification line for stderr, `None` when nothing is showing
pub fn render_notification(notification: &Notification) -> Option<String> {
    if !notification.open {
        return None;
    }

    Some(format!(
        "[{}] {}",
        notification.severity, notification.message
    ))
}
