//! tm-client
//!
//! HTTP client for the remote task API and persistence of the logged-in session.

pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use api::TaskApi;
pub use client::{Client, ClientError, ClientResult, LoginResponse};
pub use session::{LoadResult, Session, SessionError, SessionResult, SessionStore, User};
