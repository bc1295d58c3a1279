use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Clarity,
    Impact,
    Ats,
    Grammar,
    Format,
}

/// A proposed replacement for a component's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AISuggestion {
    pub id: String,
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
    pub title: String,
    pub description: String,
    pub original: String,
    pub improved: String,
    /// Set by the caller once the suggestion has been accepted.
    #[serde(default)]
    pub applied: bool,
}

/// Result of analyzing a single component. Scores are 0 – 100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AIAnalysis {
    pub score: u8,
    pub clarity: u8,
    pub impact: u8,
    pub ats_score: u8,
    pub suggestions: Vec<AISuggestion>, // at most 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewritten_version: Option<String>,
}
