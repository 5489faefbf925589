//! Web layer for the postal code server.
//!
//! Read-only JSON endpoints over a shared [`PostalDirectory`](crate::directory::PostalDirectory).

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
