use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: HeuristicAnalyzer with the configured latency.
    pub analyzer: Arc<dyn Analyzer>,
}
