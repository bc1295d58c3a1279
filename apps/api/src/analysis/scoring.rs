//! Score heuristics for a single component. All scores land in 0 – 100.

use crate::analysis::rules::{
    char_len, has_numeric_impact, has_passive_voice, has_vague_language,
    starts_with_action_verb, word_count,
};
use crate::resume::models::ResumeComponent;

/// Content longer than this is considered too long for ATS parsing.
pub const ATS_MAX_CHARS: usize = 150;

const CLARITY_BASE: i32 = 100;
const IMPACT_BASE: i32 = 60;
const ATS_BASE: i32 = 80;

pub fn clarity_score(component: &ResumeComponent) -> u8 {
    let content = &component.content;
    let mut score = CLARITY_BASE;
    if has_vague_language(content) {
        score -= 10;
    }
    if char_len(content) > ATS_MAX_CHARS {
        score -= 15;
    }
    if component.is_bullet() && !starts_with_action_verb(content) {
        score -= 20;
    }
    score.max(0) as u8
}

pub fn impact_score(component: &ResumeComponent) -> u8 {
    let content = &component.content;
    let mut score = IMPACT_BASE;
    if has_numeric_impact(content) {
        score += 25;
    }
    if starts_with_action_verb(content) {
        score += 15;
    }
    score.min(100) as u8
}

pub fn ats_score(component: &ResumeComponent) -> u8 {
    let content = &component.content;
    let mut score = ATS_BASE;
    if char_len(content) <= ATS_MAX_CHARS {
        score += 10;
    }
    if !has_passive_voice(content) {
        score += 10;
    }
    if component.is_bullet() && word_count(content) >= 10 {
        score -= 5;
    }
    score.clamp(0, 100) as u8
}

/// Rounded mean of the three component scores.
pub fn overall_score(clarity: u8, impact: u8, ats: u8) -> u8 {
    let sum = clarity as f64 + impact as f64 + ats as f64;
    (sum / 3.0).round() as u8
}
