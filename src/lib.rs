pub mod api;
pub mod config;
pub mod error;
pub mod sanitizer;
pub mod wikipedia;

use std::sync::Arc;
use wikipedia::Fetch;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn Fetch>,
}
