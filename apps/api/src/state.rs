use std::sync::Arc;

use crate::config::Config;
use crate::words::supplier::WordSupplier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable word source. Default: LlmWordSupplier.
    pub supplier: Arc<dyn WordSupplier>,
}
