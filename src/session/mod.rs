//! Session management and authentication.

mod auth;
mod session;

pub use session::Session;
