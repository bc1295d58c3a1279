//! Selection-scoped analysis runs.
//!
//! Only one analysis is in flight at a time. Selecting another component
//! aborts the running task, and any result tied to an older selection is
//! dropped instead of being shown against the wrong component.
//!
//! Driven by the editor process that owns the current selection; the HTTP
//! handlers are stateless and call the analyzer directly.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::models::AIAnalysis;
use crate::resume::models::ResumeComponent;

/// Identifies one selection. Re-selecting the same component yields a new
/// ticket, since its content may have changed in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    target_id: String,
}

impl AnalysisTicket {
    pub fn target_id(&self) -> &str {
        &self.target_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAnalysis {
    pub ticket: AnalysisTicket,
    pub analysis: AIAnalysis,
}

pub struct AnalysisSession {
    analyzer: Arc<dyn Analyzer>,
    generation: u64,
    selected: Option<AnalysisTicket>,
    in_flight: Option<JoinHandle<AIAnalysis>>,
}

impl AnalysisSession {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            analyzer,
            generation: 0,
            selected: None,
            in_flight: None,
        }
    }

    /// Starts analyzing `component`, superseding any earlier selection.
    pub fn select(
        &mut self,
        component: Arc<ResumeComponent>,
        context_path: Vec<String>,
    ) -> AnalysisTicket {
        self.cancel_in_flight();

        self.generation += 1;
        let ticket = AnalysisTicket {
            generation: self.generation,
            target_id: component.id.clone(),
        };

        let analyzer = Arc::clone(&self.analyzer);
        self.in_flight = Some(tokio::spawn(async move {
            analyzer.analyze(&component, &context_path).await
        }));
        self.selected = Some(ticket.clone());

        debug!(
            target_id = %ticket.target_id,
            generation = ticket.generation,
            "analysis started"
        );
        ticket
    }

    /// Drops the current selection and aborts its analysis.
    pub fn clear(&mut self) {
        self.cancel_in_flight();
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|t| t.target_id.as_str())
    }

    pub fn is_current(&self, ticket: &AnalysisTicket) -> bool {
        self.selected.as_ref() == Some(ticket)
    }

    /// Passes `analysis` through only if `ticket` is still the current selection.
    pub fn settle(&self, ticket: &AnalysisTicket, analysis: AIAnalysis) -> Option<AIAnalysis> {
        if self.is_current(ticket) {
            Some(analysis)
        } else {
            debug!(
                target_id = %ticket.target_id,
                generation = ticket.generation,
                "discarding stale analysis"
            );
            None
        }
    }

    /// Waits for the current analysis. Returns `None` when nothing is in
    /// flight or the task did not complete.
    pub async fn resolve(&mut self) -> Option<ResolvedAnalysis> {
        let handle = self.in_flight.take()?;
        let ticket = self.selected.clone()?;
        match handle.await {
            Ok(analysis) => self
                .settle(&ticket, analysis)
                .map(|analysis| ResolvedAnalysis { ticket, analysis }),
            Err(e) if e.is_cancelled() => None,
            Err(e) => {
                warn!(target_id = %ticket.target_id, "analysis task failed: {e}");
                None
            }
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!("aborting superseded analysis");
            }
            handle.abort();
        }
    }
}

impl Drop for AnalysisSession {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
