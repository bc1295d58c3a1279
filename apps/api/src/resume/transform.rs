//! Conversion between the parser backend's section/block payload and the
//! resume component tree.
//!
//! Blocks that carry bullets or any experience field become `job` nodes;
//! every other block becomes a single `bullet` leaf. Either way the block's
//! backend fields ride along in the node's metadata so export restores them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::resume::models::{ComponentMetadata, ComponentType, ResumeComponent};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendResumeResponse {
    pub resume_id: String,
    pub title: String,
    pub sections: Vec<BackendSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendSection {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: String,
    pub label: String,
    #[serde(default)]
    pub blocks: Vec<BackendBlock>,
    #[serde(default)]
    pub order: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackendBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<BackendBullet>>,
    // Experience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<String>,
    // Education
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    // Projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendBullet {
    pub id: String,
    pub text: String,
}

impl BackendBlock {
    fn is_job_like(&self) -> bool {
        self.bullets.as_ref().is_some_and(|b| !b.is_empty())
            || self.company.is_some()
            || self.institution.is_some()
            || self.date_range.is_some()
    }

    fn display_title(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.degree.clone())
            .or_else(|| self.name.clone())
            .unwrap_or_else(|| self.text.clone())
    }

    fn metadata(&self) -> ComponentMetadata {
        ComponentMetadata {
            company: self.company.clone(),
            position: self.title.clone(),
            dates: self.date_range.clone(),
            location: self.location.clone(),
            kind: Some(self.block_type.clone()),
            institution: self.institution.clone(),
            degree: self.degree.clone(),
            field: self.field.clone(),
            name: self.name.clone(),
            score: self.score,
            strength: self.strength.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Builds a component tree from a parser response. Sections are ordered by
/// their `order` field; ties keep payload order.
pub fn to_component_tree(response: &BackendResumeResponse) -> ResumeComponent {
    if let Some(error) = &response.error {
        warn!(resume_id = %response.resume_id, "backend reported a parsing error: {error}");
    }

    let mut sections: Vec<&BackendSection> = response.sections.iter().collect();
    sections.sort_by(|a, b| a.order.total_cmp(&b.order));

    let children = sections.into_iter().map(section_to_component).collect();

    ResumeComponent::new(
        response.resume_id.clone(),
        ComponentType::Resume,
        response.title.clone(),
        String::new(),
    )
    .with_children(children)
}

fn section_to_component(section: &BackendSection) -> ResumeComponent {
    let blocks = section.blocks.iter().map(block_to_component).collect();
    ResumeComponent::new(
        section.id.clone(),
        ComponentType::Section,
        section.label.clone(),
        String::new(),
    )
    .with_metadata(ComponentMetadata {
        kind: Some(section.section_type.clone()),
        ..Default::default()
    })
    .with_children(blocks)
}

fn block_to_component(block: &BackendBlock) -> ResumeComponent {
    let component_type = if block.is_job_like() {
        ComponentType::Job
    } else {
        ComponentType::Bullet
    };
    let bullets = block
        .bullets
        .iter()
        .flatten()
        .map(|b| {
            ResumeComponent::new(
                b.id.clone(),
                ComponentType::Bullet,
                b.text.clone(),
                b.text.clone(),
            )
        })
        .collect();

    ResumeComponent::new(
        block.id.clone(),
        component_type,
        block.display_title(),
        block.text.clone(),
    )
    .with_metadata(block.metadata())
    .with_children(bullets)
}

/// Maps a component tree back to the parser payload for export. Section
/// order is the tree's child order; fields captured on import are restored.
pub fn from_component_tree(root: &ResumeComponent) -> BackendResumeResponse {
    let sections = root
        .children
        .iter()
        .enumerate()
        .map(|(idx, section)| BackendSection {
            id: section.id.clone(),
            section_type: section
                .metadata
                .as_ref()
                .and_then(|m| m.kind.clone())
                .unwrap_or_else(|| section.component_type.as_str().to_string()),
            label: section.title.clone(),
            blocks: section.children.iter().map(|c| component_to_block(c)).collect(),
            order: idx as f64,
        })
        .collect();

    BackendResumeResponse {
        resume_id: root.id.clone(),
        title: root.title.clone(),
        sections,
        error: None,
    }
}

fn component_to_block(component: &Arc<ResumeComponent>) -> BackendBlock {
    let metadata = component.metadata.clone().unwrap_or_default();
    let default_kind = match component.component_type {
        ComponentType::Job => "experience",
        _ => "bullet",
    };
    let bullets = if component.children.is_empty() {
        None
    } else {
        Some(
            component
                .children
                .iter()
                .map(|b| BackendBullet {
                    id: b.id.clone(),
                    text: b.content.clone(),
                })
                .collect(),
        )
    };

    BackendBlock {
        id: component.id.clone(),
        block_type: metadata.kind.unwrap_or_else(|| default_kind.to_string()),
        text: component.content.clone(),
        bullets,
        company: metadata.company,
        title: metadata.position,
        location: metadata.location,
        date_range: metadata.dates,
        institution: metadata.institution,
        degree: metadata.degree,
        field: metadata.field,
        name: metadata.name,
        score: metadata.score,
        strength: metadata.strength,
        tags: metadata.tags,
    }
}
