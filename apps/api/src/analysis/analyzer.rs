//! Heuristic component analyzer.
//!
//! Stands in for a model-backed review while the editor is developed: the
//! output has the same shape a real review would, but every score and
//! suggestion comes from fixed string rules, so the same component always
//! yields the same analysis.
//!
//! `AppState` holds an `Arc<dyn Analyzer>`; `HeuristicAnalyzer` is the only
//! backend and adds a configurable delay to mimic a network round trip.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::analysis::models::{AIAnalysis, AISuggestion, SuggestionCategory};
use crate::analysis::rules::{
    add_metrics, char_len, convert_to_active_voice, has_passive_voice, improve_action_verb,
    rewrite, starts_with_action_verb, truncate_with_ellipsis,
};
use crate::analysis::scoring::{
    ats_score, clarity_score, impact_score, overall_score, ATS_MAX_CHARS,
};
use crate::resume::models::ResumeComponent;

pub const MAX_SUGGESTIONS: usize = 5;

/// Length kept when shortening an over-long bullet.
const ATS_TRUNCATE_CHARS: usize = 130;

/// Content containing this literal is treated as already quantified.
const QUANTIFIED_MARKER: &str = "quantifiable";

#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, component: &ResumeComponent, context_path: &[String]) -> AIAnalysis;
}

pub struct HeuristicAnalyzer {
    latency: Duration,
}

impl HeuristicAnalyzer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl Analyzer for HeuristicAnalyzer {
    async fn analyze(&self, component: &ResumeComponent, context_path: &[String]) -> AIAnalysis {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        analyze_component(component, context_path)
    }
}

/// Scores a component and, for bullets, proposes up to five rewrites.
///
/// Suggestions are generated in a fixed order (impact, clarity, ats,
/// grammar). Non-bullet components are scored but get no suggestions.
pub fn analyze_component(component: &ResumeComponent, context_path: &[String]) -> AIAnalysis {
    debug!(
        component_id = %component.id,
        component_type = component.component_type.as_str(),
        context = %context_path.join(" > "),
        "analyzing component"
    );

    let mut suggestions = if component.is_bullet() {
        bullet_suggestions(component)
    } else {
        Vec::new()
    };

    let clarity = clarity_score(component);
    let impact = impact_score(component);
    let ats = ats_score(component);

    let rewritten_version = if suggestions.is_empty() {
        None
    } else {
        Some(rewrite(&component.content))
    };
    suggestions.truncate(MAX_SUGGESTIONS);

    AIAnalysis {
        score: overall_score(clarity, impact, ats),
        clarity,
        impact,
        ats_score: ats,
        suggestions,
        rewritten_version,
    }
}

fn bullet_suggestions(component: &ResumeComponent) -> Vec<AISuggestion> {
    let content = component.content.as_str();
    let suggestion = |rule: u8, category, title: &str, description: &str, improved: String| {
        AISuggestion {
            id: format!("sugg-{}-{rule}", component.id),
            category,
            title: title.to_string(),
            description: description.to_string(),
            original: content.to_string(),
            improved,
            applied: false,
        }
    };

    let mut suggestions = Vec::new();

    if !content.contains(QUANTIFIED_MARKER) {
        suggestions.push(suggestion(
            1,
            SuggestionCategory::Impact,
            "Add quantifiable results",
            "Include specific numbers or percentages to demonstrate impact",
            add_metrics(content),
        ));
    }

    if !starts_with_action_verb(content) {
        suggestions.push(suggestion(
            2,
            SuggestionCategory::Clarity,
            "Start with strong action verb",
            "Begin with a powerful action verb to show ownership",
            improve_action_verb(content),
        ));
    }

    if char_len(content) > ATS_MAX_CHARS {
        suggestions.push(suggestion(
            3,
            SuggestionCategory::Ats,
            "Shorten for ATS optimization",
            "Keep bullet points concise for better ATS parsing",
            truncate_with_ellipsis(content, ATS_TRUNCATE_CHARS),
        ));
    }

    if has_passive_voice(content) {
        suggestions.push(suggestion(
            4,
            SuggestionCategory::Grammar,
            "Use active voice",
            "Active voice is more impactful and direct",
            convert_to_active_voice(content),
        ));
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::models::ComponentType;
    use crate::resume::sample::sample_resume;

    fn bullet(content: &str) -> ResumeComponent {
        ResumeComponent::new("b1", ComponentType::Bullet, "Bullet", content)
    }

    fn categories(analysis: &AIAnalysis) -> Vec<SuggestionCategory> {
        analysis.suggestions.iter().map(|s| s.category).collect()
    }

    fn collect_nodes(node: &ResumeComponent, out: &mut Vec<ResumeComponent>) {
        out.push(node.clone());
        for child in &node.children {
            collect_nodes(child, out);
        }
    }

    #[test]
    fn test_weak_opener_gets_clarity_but_no_grammar() {
        let analysis = analyze_component(
            &bullet("Responsible for improving system performance"),
            &[],
        );
        let cats = categories(&analysis);
        assert!(cats.contains(&SuggestionCategory::Clarity));
        assert!(!cats.contains(&SuggestionCategory::Grammar));
        // "improving" is not "improved", so the metrics rewrite is a no-op.
        assert_eq!(
            analysis.suggestions[0].improved,
            "Responsible for improving system performance"
        );
    }

    #[test]
    fn test_long_active_bullet_gets_single_ats_suggestion() {
        let content: String = format!("Led {}", "platform work ".repeat(20))
            .chars()
            .take(200)
            .collect();
        assert_eq!(content.chars().count(), 200);

        let analysis = analyze_component(&bullet(&content), &[]);
        let cats = categories(&analysis);
        assert_eq!(
            cats.iter().filter(|c| **c == SuggestionCategory::Ats).count(),
            1
        );
        assert!(!cats.contains(&SuggestionCategory::Clarity));

        let ats = analysis
            .suggestions
            .iter()
            .find(|s| s.category == SuggestionCategory::Ats)
            .unwrap();
        assert_eq!(ats.improved.chars().count(), 133);
        assert!(ats.improved.ends_with("..."));
        assert_eq!(ats.id, "sugg-b1-3");
    }

    #[test]
    fn test_passive_opener_gets_grammar_and_clarity() {
        let analysis = analyze_component(
            &bullet("Was responsible for leading a team of 5 engineers"),
            &["Resume".to_string(), "Experience".to_string()],
        );
        let cats = categories(&analysis);
        assert!(cats.contains(&SuggestionCategory::Grammar));
        assert!(cats.contains(&SuggestionCategory::Clarity));

        let rewritten = analysis.rewritten_version.unwrap();
        assert_eq!(rewritten, "Led leading a team of 5 engineers");
        assert!(!rewritten.contains("Was responsible for"));
    }

    #[test]
    fn test_suggestions_follow_rule_order() {
        let content = format!("Was responsible for {}", "many reports ".repeat(15));
        let analysis = analyze_component(&bullet(&content), &[]);
        assert_eq!(
            categories(&analysis),
            vec![
                SuggestionCategory::Impact,
                SuggestionCategory::Clarity,
                SuggestionCategory::Ats,
                SuggestionCategory::Grammar,
            ]
        );
        assert!(analysis.suggestions.len() <= MAX_SUGGESTIONS);
        assert!(analysis.suggestions.iter().all(|s| !s.applied));
        assert!(analysis.suggestions.iter().all(|s| s.original == content));
    }

    #[test]
    fn test_quantifiable_marker_suppresses_impact_suggestion() {
        let analysis = analyze_component(&bullet("Led quantifiable wins"), &[]);
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.rewritten_version.is_none());
    }

    #[test]
    fn test_non_bullet_gets_scores_only() {
        let job = ResumeComponent::new(
            "job-1",
            ComponentType::Job,
            "Engineer",
            "Was responsible for various things",
        );
        let analysis = analyze_component(&job, &[]);
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.rewritten_version.is_none());
        // No weak-opener deduction outside bullets.
        assert_eq!(analysis.clarity, 90);
    }

    #[test]
    fn test_empty_content_is_handled() {
        let analysis = analyze_component(&bullet(""), &[]);
        assert_eq!(
            categories(&analysis),
            vec![SuggestionCategory::Impact, SuggestionCategory::Clarity]
        );
        assert_eq!(analysis.rewritten_version.as_deref(), Some(""));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let component = bullet("Was responsible for reduced costs across multiple teams");
        let context = vec!["Resume".to_string()];
        assert_eq!(
            analyze_component(&component, &context),
            analyze_component(&component, &context)
        );
    }

    #[test]
    fn test_scores_stay_in_bounds_for_sample_and_edge_cases() {
        let mut nodes = Vec::new();
        collect_nodes(&sample_resume(), &mut nodes);
        nodes.push(bullet(""));
        nodes.push(bullet(&"various multiple was ".repeat(40)));
        nodes.push(bullet("Led 100% growth to $5M with 10K+ users"));

        for node in &nodes {
            let a = analyze_component(node, &[]);
            for score in [a.score, a.clarity, a.impact, a.ats_score] {
                assert!(score <= 100, "{} scored {score}", node.id);
            }
        }
    }

    #[test]
    fn test_overall_score_is_mean_of_parts() {
        let a = analyze_component(&bullet("Led growth of 40%"), &[]);
        assert_eq!((a.clarity, a.impact, a.ats_score), (100, 100, 100));
        assert_eq!(a.score, 100);
    }

    #[tokio::test(start_paused = true)]
    async fn test_heuristic_analyzer_waits_for_latency() {
        let analyzer = HeuristicAnalyzer::new(Duration::from_millis(800));
        let component = bullet("Led growth of 40%");
        let start = tokio::time::Instant::now();
        let analysis = analyzer.analyze(&component, &[]).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
        assert_eq!(analysis, analyze_component(&component, &[]));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let analysis = analyze_component(&bullet("Responsible for reports"), &[]);
        let value = serde_json::to_value(&analysis).unwrap();
        assert!(value.get("atsScore").is_some());
        assert!(value.get("rewrittenVersion").is_some());
        assert_eq!(value["suggestions"][0]["type"], "impact");
    }
}
