use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Resume,
    Section,
    Job,
    Bullet,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Resume => "resume",
            ComponentType::Section => "section",
            ComponentType::Job => "job",
            ComponentType::Bullet => "bullet",
        }
    }
}

/// Optional node attributes.
///
/// `company`, `position`, `dates` and `location` describe `job` nodes. The
/// remaining fields hold what the parser backend attached to a section or
/// block (its `kind`, scores, tags, education and project fields) so an
/// exported resume carries them back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Backend section or block type, e.g. "experience" or "skill-item".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ComponentMetadata {
    pub fn is_empty(&self) -> bool {
        *self == ComponentMetadata::default()
    }
}

/// A node of the resume component tree.
///
/// Children are held behind `Arc` so an edit can rebuild the path from the
/// root to the edited node and share every other subtree with the previous
/// tree. Nodes are never mutated once wrapped, which also makes cycles
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Arc<ResumeComponent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ComponentMetadata>,
}

impl ResumeComponent {
    pub fn new(
        id: impl Into<String>,
        component_type: ComponentType,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            component_type,
            title: title.into(),
            content: content.into(),
            children: Vec::new(),
            metadata: None,
        }
    }

    pub fn with_children(mut self, children: Vec<ResumeComponent>) -> Self {
        self.children = children.into_iter().map(Arc::new).collect();
        self
    }

    /// Attaches metadata; an all-empty value leaves the node without any.
    pub fn with_metadata(mut self, metadata: ComponentMetadata) -> Self {
        self.metadata = (!metadata.is_empty()).then_some(metadata);
        self
    }

    pub fn is_bullet(&self) -> bool {
        self.component_type == ComponentType::Bullet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_leaf_deserializes_without_children_or_metadata() {
        let node: ResumeComponent = serde_json::from_value(json!({
            "id": "bullet-1",
            "type": "bullet",
            "title": "Led migration",
            "content": "Led migration to Rust"
        }))
        .unwrap();
        assert_eq!(node.component_type, ComponentType::Bullet);
        assert!(node.children.is_empty());
        assert!(node.metadata.is_none());
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let node: ResumeComponent =
            serde_json::from_value(json!({ "id": "s", "type": "section" })).unwrap();
        assert_eq!(node.title, "");
        assert_eq!(node.content, "");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<ResumeComponent, _> =
            serde_json::from_value(json!({ "id": "x", "type": "paragraph" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_leaf_serializes_without_empty_children() {
        let node = ResumeComponent::new("b", ComponentType::Bullet, "t", "c");
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "bullet");
        assert!(value.get("children").is_none());
        assert!(value.get("metadata").is_none());
    }

    #[test]
    fn test_job_metadata_round_trips_partial_fields() {
        let job = ResumeComponent::new("job-1", ComponentType::Job, "Engineer", "Acme")
            .with_metadata(ComponentMetadata {
                company: Some("Acme".to_string()),
                dates: Some("2020 - Present".to_string()),
                ..Default::default()
            });
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["metadata"]["company"], "Acme");
        assert!(value["metadata"].get("position").is_none());
    }

    #[test]
    fn test_metadata_is_empty_only_without_fields() {
        assert!(ComponentMetadata::default().is_empty());
        let tagged = ComponentMetadata {
            tags: Some(vec!["backend".to_string()]),
            ..Default::default()
        };
        assert!(!tagged.is_empty());
    }

    #[test]
    fn test_empty_metadata_is_not_attached() {
        let node = ResumeComponent::new("b", ComponentType::Bullet, "t", "c")
            .with_metadata(ComponentMetadata::default());
        assert!(node.metadata.is_none());
    }
}
