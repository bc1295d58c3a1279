// Heuristic analysis of resume components: scores, suggestions, rewrites.
// The analyzer is pure; latency and stale-result handling live in `session`.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod rules;
pub mod scoring;
#[allow(dead_code)]
pub mod session;
