use anyhow::anyhow;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::models::AISuggestion;
use crate::errors::AppError;
use crate::resume::models::ResumeComponent;
use crate::resume::sample::sample_resume;
use crate::resume::transform::{from_component_tree, to_component_tree, BackendResumeResponse};
use crate::resume::tree::ResumeTree;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRequest {
    pub resume: ResumeTree,
    pub component_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResponse {
    pub component: ResumeComponent,
    pub context_path: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    pub resume: ResumeComponent,
    pub node_count: usize,
    pub duplicate_ids: Vec<String>,
    pub transformed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionRequest {
    pub resume: ResumeTree,
    pub component_id: String,
    pub suggestion: AISuggestion,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionResponse {
    pub resume: ResumeTree,
    pub suggestion: AISuggestion,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    pub resume: ResumeTree,
    pub component_id: String,
    pub content: String,
}

/// Finds a component and its breadcrumb trail. An empty resume is a 400,
/// a missing id a 404.
pub fn locate_component<'a>(
    resume: &'a ResumeTree,
    component_id: &str,
) -> Result<(&'a ResumeComponent, Vec<String>), AppError> {
    if resume.is_empty() {
        return Err(AppError::Validation("Resume is empty".to_string()));
    }
    let not_found = || AppError::NotFound(format!("Component {component_id} not found"));
    let component = resume.find(component_id).ok_or_else(not_found)?;
    let context_path = resume.context_path(component_id).ok_or_else(not_found)?;
    Ok((component, context_path))
}

/// GET /api/v1/resume/sample
pub async fn handle_sample() -> Json<ResumeComponent> {
    Json(sample_resume())
}

/// POST /api/v1/resume/transform
pub async fn handle_transform(
    Json(req): Json<BackendResumeResponse>,
) -> Result<Json<TransformResponse>, AppError> {
    let tree = ResumeTree::new(to_component_tree(&req));
    let duplicate_ids = tree.duplicate_ids();
    if !duplicate_ids.is_empty() {
        warn!(
            resume_id = %req.resume_id,
            "resume has duplicate component ids {duplicate_ids:?}; lookups resolve to the first"
        );
    }
    let node_count = tree.len();
    info!(resume_id = %req.resume_id, node_count, "transformed backend resume");

    let resume = tree
        .root()
        .map(|root| ResumeComponent::clone(root))
        .ok_or_else(|| anyhow!("transformed resume {} has no root", req.resume_id))?;

    Ok(Json(TransformResponse {
        resume,
        node_count,
        duplicate_ids,
        transformed_at: Utc::now(),
    }))
}

/// POST /api/v1/resume/export
pub async fn handle_export(
    Json(resume): Json<ResumeTree>,
) -> Result<Json<BackendResumeResponse>, AppError> {
    let root = resume
        .root()
        .ok_or_else(|| AppError::Validation("Resume is empty".to_string()))?;
    Ok(Json(from_component_tree(root)))
}

/// POST /api/v1/components/lookup
pub async fn handle_lookup(
    Json(req): Json<ComponentRequest>,
) -> Result<Json<LookupResponse>, AppError> {
    let (component, context_path) = locate_component(&req.resume, &req.component_id)?;
    Ok(Json(LookupResponse {
        component: component.clone(),
        context_path,
    }))
}

/// POST /api/v1/components/apply
pub async fn handle_apply_suggestion(
    Json(req): Json<ApplySuggestionRequest>,
) -> Result<Json<ApplySuggestionResponse>, AppError> {
    let ApplySuggestionRequest {
        resume,
        component_id,
        mut suggestion,
    } = req;

    if suggestion.applied {
        return Err(AppError::Validation(format!(
            "Suggestion {} was already applied",
            suggestion.id
        )));
    }

    let resume = resume
        .with_suggestion_applied(&component_id, &mut suggestion)
        .ok_or_else(|| AppError::NotFound(format!("Component {component_id} not found")))?;

    info!(component_id = %component_id, suggestion_id = %suggestion.id, "suggestion applied");
    Ok(Json(ApplySuggestionResponse { resume, suggestion }))
}

/// POST /api/v1/components/content
pub async fn handle_update_content(
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<ResumeTree>, AppError> {
    let resume = req
        .resume
        .with_content(&req.component_id, req.content)
        .ok_or_else(|| AppError::NotFound(format!("Component {} not found", req.component_id)))?;
    Ok(Json(resume))
}
