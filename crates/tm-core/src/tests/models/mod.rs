mod draft;
mod lane_spec;
mod notification;
mod status;
mod status_command;
mod task;
