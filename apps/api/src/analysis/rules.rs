//! Fixed vocabularies and text rewrites used by the heuristic analyzer.
//!
//! Each table is an ordered list of `(pattern, replacement)` pairs compiled
//! once into case-insensitive regexes. Tables are applied entry by entry, so
//! a later entry sees the output of the earlier ones.

use std::sync::LazyLock;

use regex::Regex;

/// Verbs that count as a strong opening when found inside the first word.
pub const ACTION_VERBS: &[&str] = &[
    "led",
    "built",
    "implemented",
    "developed",
    "created",
    "managed",
    "designed",
    "optimized",
    "improved",
    "reduced",
    "increased",
    "achieved",
    "delivered",
    "launched",
];

const METRIC_PHRASES: &[(&str, &str)] = &[
    ("improved", "improved by 35%"),
    ("reduced", "reduced by 40%"),
    ("increased", "increased by 50%"),
];

const WEAK_OPENERS: &[(&str, &str)] = &[
    ("was responsible for", "Led"),
    ("worked on", "Developed"),
    ("helped with", "Contributed to"),
    ("did", "Executed"),
    ("made", "Created"),
];

const PASSIVE_PHRASES: &[(&str, &str)] = &[
    ("was responsible for", "Led"),
    ("were implemented", "Implemented"),
    ("was created", "Created"),
];

const PASSIVE_MARKERS: &[&str] = &["was ", "were ", "been ", "being "];

const VAGUE_WORDS: &[&str] = &["various", "multiple"];

/// Whether a substitution rewrites the first match only or every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Occurrences {
    First,
    All,
}

struct SubstitutionTable {
    entries: Vec<(Regex, &'static str)>,
    occurrences: Occurrences,
}

impl SubstitutionTable {
    fn compile(pairs: &[(&'static str, &'static str)], occurrences: Occurrences) -> Self {
        let entries = pairs
            .iter()
            .map(|&(pattern, replacement)| {
                let regex = Regex::new(&format!("(?i){}", regex::escape(pattern)))
                    .expect("substitution patterns are escaped literals");
                (regex, replacement)
            })
            .collect();
        Self {
            entries,
            occurrences,
        }
    }

    fn apply(&self, text: &str) -> String {
        let limit = match self.occurrences {
            Occurrences::First => 1,
            Occurrences::All => 0,
        };
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (regex, replacement)| {
                regex
                    .replacen(&acc, limit, regex::NoExpand(*replacement))
                    .into_owned()
            })
    }
}

static METRICS_TABLE: LazyLock<SubstitutionTable> =
    LazyLock::new(|| SubstitutionTable::compile(METRIC_PHRASES, Occurrences::First));

static ACTION_VERB_TABLE: LazyLock<SubstitutionTable> =
    LazyLock::new(|| SubstitutionTable::compile(WEAK_OPENERS, Occurrences::First));

static PASSIVE_TABLE: LazyLock<SubstitutionTable> =
    LazyLock::new(|| SubstitutionTable::compile(PASSIVE_PHRASES, Occurrences::All));

/// Percentages, "10K+" / "5M+" style counts, or dollar amounts.
static NUMERIC_IMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+%|\d+[KM]?\+|\$\d+").expect("numeric impact pattern is valid")
});

/// Inserts placeholder metrics after "improved", "reduced" and "increased".
pub fn add_metrics(content: &str) -> String {
    METRICS_TABLE.apply(content)
}

/// Replaces weak opening phrases such as "was responsible for" with action verbs.
pub fn improve_action_verb(content: &str) -> String {
    ACTION_VERB_TABLE.apply(content)
}

pub fn convert_to_active_voice(content: &str) -> String {
    PASSIVE_TABLE.apply(content)
}

/// True when the first whitespace-delimited word contains a listed action verb.
pub fn starts_with_action_verb(content: &str) -> bool {
    let first_word = content
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase();
    ACTION_VERBS.iter().any(|verb| first_word.contains(verb))
}

pub fn has_passive_voice(content: &str) -> bool {
    let lower = content.to_lowercase();
    PASSIVE_MARKERS.iter().any(|marker| lower.contains(marker))
}

pub fn has_vague_language(content: &str) -> bool {
    VAGUE_WORDS.iter().any(|word| content.contains(word))
}

pub fn has_numeric_impact(content: &str) -> bool {
    NUMERIC_IMPACT.is_match(content)
}

/// Character count, not byte length.
pub fn char_len(content: &str) -> usize {
    content.chars().count()
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Keeps the first `max_chars` characters and appends "...".
pub fn truncate_with_ellipsis(content: &str, max_chars: usize) -> String {
    let mut truncated: String = content.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Full rewrite: action verbs, then metrics, then active voice.
pub fn rewrite(content: &str) -> String {
    let rewritten = improve_action_verb(content);
    let rewritten = add_metrics(&rewritten);
    convert_to_active_voice(&rewritten)
}
