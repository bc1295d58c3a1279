use axum::{extract::State, Json};
use serde::Serialize;

use crate::analysis::models::AIAnalysis;
use crate::errors::AppError;
use crate::resume::handlers::{locate_component, ComponentRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub component_id: String,
    pub context_path: Vec<String>,
    pub analysis: AIAnalysis,
}

/// POST /api/v1/components/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<ComponentRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (component, context_path) = locate_component(&req.resume, &req.component_id)?;
    let analysis = state.analyzer.analyze(component, &context_path).await;
    Ok(Json(AnalyzeResponse {
        component_id: req.component_id.clone(),
        context_path,
        analysis,
    }))
}
