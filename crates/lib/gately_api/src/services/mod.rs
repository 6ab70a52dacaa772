//! Service layer: the flows behind the HTTP handlers.

pub mod auth;
pub mod users;
