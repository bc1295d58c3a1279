//! Resume tree traversal and persistent updates.
//!
//! Lookups are depth-first pre-order and stop at the first match, so a tree
//! carrying duplicate ids resolves to the earliest node. Updates never mutate:
//! they rebuild the nodes from the root down to the target and share every
//! other subtree with the original tree.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::models::AISuggestion;
use crate::resume::models::ResumeComponent;

/// Returns the first node in pre-order whose id equals `id`.
pub fn find_component_by_id<'a>(
    root: &'a ResumeComponent,
    id: &str,
) -> Option<&'a ResumeComponent> {
    if root.id == id {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_component_by_id(child, id))
}

/// Returns the titles from `root` down to the target node, target included.
pub fn get_context_path(root: &ResumeComponent, target_id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if collect_path(root, target_id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn collect_path(node: &ResumeComponent, target_id: &str, path: &mut Vec<String>) -> bool {
    path.push(node.title.clone());
    if node.id == target_id {
        return true;
    }
    for child in &node.children {
        if collect_path(child, target_id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Returns a new root with the content of node `id` replaced, or `None` if
/// the id is absent. Only the root-to-target path is reallocated.
pub fn replace_content(
    root: &Arc<ResumeComponent>,
    id: &str,
    content: impl Into<String>,
) -> Option<Arc<ResumeComponent>> {
    let content = content.into();
    rebuild_path(root, id, &content)
}

fn rebuild_path(
    node: &Arc<ResumeComponent>,
    id: &str,
    content: &str,
) -> Option<Arc<ResumeComponent>> {
    if node.id == id {
        let mut updated = ResumeComponent::clone(node);
        updated.content = content.to_string();
        return Some(Arc::new(updated));
    }
    for (idx, child) in node.children.iter().enumerate() {
        if let Some(new_child) = rebuild_path(child, id, content) {
            // Cloning the node clones its child `Arc`s, not the subtrees.
            let mut updated = ResumeComponent::clone(node);
            updated.children[idx] = new_child;
            return Some(Arc::new(updated));
        }
    }
    None
}

/// Accepts a suggestion: writes `suggestion.improved` into the component and
/// marks the suggestion applied. Leaves the suggestion untouched on a miss.
pub fn apply_suggestion(
    root: &Arc<ResumeComponent>,
    component_id: &str,
    suggestion: &mut AISuggestion,
) -> Option<Arc<ResumeComponent>> {
    let updated = replace_content(root, component_id, suggestion.improved.clone())?;
    suggestion.applied = true;
    Some(updated)
}

/// Ids that occur more than once, each listed once in order of its second
/// pre-order occurrence. Diagnostic only: lookups keep first-match semantics.
pub fn duplicate_ids(root: &ResumeComponent) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    collect_duplicates(root, &mut seen, &mut reported, &mut duplicates);
    duplicates
}

fn collect_duplicates<'a>(
    node: &'a ResumeComponent,
    seen: &mut HashSet<&'a str>,
    reported: &mut HashSet<&'a str>,
    duplicates: &mut Vec<String>,
) {
    if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
        duplicates.push(node.id.clone());
    }
    for child in &node.children {
        collect_duplicates(child, seen, reported, duplicates);
    }
}

fn count_nodes(node: &ResumeComponent) -> usize {
    1 + node.children.iter().map(|c| count_nodes(c)).sum::<usize>()
}

/// A possibly-empty resume tree. Serializes as the root node or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeTree {
    root: Option<Arc<ResumeComponent>>,
}

impl ResumeTree {
    pub fn new(root: ResumeComponent) -> Self {
        Self {
            root: Some(Arc::new(root)),
        }
    }

    pub fn root(&self) -> Option<&Arc<ResumeComponent>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map(count_nodes).unwrap_or(0)
    }

    pub fn find(&self, id: &str) -> Option<&ResumeComponent> {
        find_component_by_id(self.root.as_deref()?, id)
    }

    pub fn context_path(&self, id: &str) -> Option<Vec<String>> {
        get_context_path(self.root.as_deref()?, id)
    }

    pub fn with_content(&self, id: &str, content: impl Into<String>) -> Option<ResumeTree> {
        let root = replace_content(self.root.as_ref()?, id, content)?;
        Some(ResumeTree { root: Some(root) })
    }

    pub fn with_suggestion_applied(
        &self,
        component_id: &str,
        suggestion: &mut AISuggestion,
    ) -> Option<ResumeTree> {
        let root = apply_suggestion(self.root.as_ref()?, component_id, suggestion)?;
        Some(ResumeTree { root: Some(root) })
    }

    pub fn duplicate_ids(&self) -> Vec<String> {
        self.root.as_deref().map(duplicate_ids).unwrap_or_default()
    }
}

impl From<ResumeComponent> for ResumeTree {
    fn from(root: ResumeComponent) -> Self {
        Self::new(root)
    }
}
