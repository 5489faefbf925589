//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::PostalDirectory;

/// Shared application state.
///
/// The directory is read-only once the server is running.
#[derive(Clone)]
pub struct AppState {
    /// Postal directory being served
    pub directory: Arc<PostalDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: PostalDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
        }
    }
}
