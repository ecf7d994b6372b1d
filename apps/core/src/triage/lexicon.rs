//! Ticket lexicons: label sets and their keyword tables.
//!
//! Fixed keyword tables compiled into word-boundary matchers.
//! No ML model required - pure Rust regex matching.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Ticket category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Defect report (error, crash, broken, etc.)
    Bug,
    /// Change request (add, enhancement, upgrade, etc.)
    Feature,
    /// Question or support request (how, help, explain, etc.)
    Query,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Returns a human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::Feature => "feature",
            Category::Query => "query",
        }
    }
}

/// Ticket priority label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs attention now (urgent, outage, data loss, etc.)
    High,
    /// Normal backlog work (important, needed, should, etc.)
    Medium,
    /// Can wait (minor, cosmetic, nice to have, etc.)
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Priority {
    /// Returns a human-readable label for the priority
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Keywords counted toward the bug category
const BUG_KEYWORDS: &[&str] = &[
    "error", "bug", "crash", "broken", "not working", "issue", "problem", "fail", "exception",
    "null", "undefined", "timeout", "freeze", "incorrect", "wrong", "malfunction", "glitch",
    "defect",
];

/// Keywords counted toward the feature category
const FEATURE_KEYWORDS: &[&str] = &[
    "feature", "enhancement", "improvement", "add", "new", "request", "suggest", "proposal",
    "implement", "develop", "create", "build", "upgrade", "extend", "modify", "change", "update",
];

/// Keywords counted toward the query category
const QUERY_KEYWORDS: &[&str] = &[
    "how", "what", "where", "when", "why", "question", "help", "support", "documentation",
    "guide", "tutorial", "explain", "clarify", "understand", "confused", "unclear", "info",
];

/// Keywords counted toward high priority
const HIGH_KEYWORDS: &[&str] = &[
    "urgent", "critical", "emergency", "asap", "immediately", "blocker", "production", "down",
    "outage", "security", "data loss", "crash",
];

/// Keywords counted toward medium priority
const MEDIUM_KEYWORDS: &[&str] = &["important", "soon", "needed", "required", "should", "moderate"];

/// Keywords counted toward low priority
const LOW_KEYWORDS: &[&str] = &[
    "minor", "nice to have", "eventually", "low priority", "cosmetic", "suggestion",
    "enhancement", "improvement",
];

/// One label's compiled keyword matchers
#[derive(Debug, Clone)]
struct LexiconEntry<L> {
    label: L,
    matchers: Vec<Regex>,
}

impl<L> LexiconEntry<L> {
    /// Count non-overlapping keyword hits in the text, summed over all phrases
    fn count_hits(&self, text: &str) -> usize {
        self.matchers
            .iter()
            .map(|matcher| matcher.find_iter(text).count())
            .sum()
    }
}

/// Immutable label set with keyword matchers and a fallback label.
///
/// Label order is the declaration order of the table it was built from;
/// scoring and tie-breaking both follow that order.
#[derive(Debug, Clone)]
pub struct Lexicon<L> {
    entries: Vec<LexiconEntry<L>>,
    fallback: L,
}

impl<L: Copy> Lexicon<L> {
    /// Compile a lexicon from (label, keyword phrases) pairs.
    ///
    /// Each phrase becomes a case-insensitive whole-phrase matcher:
    /// "bug" does not hit inside "bugged" or "debug", and multi-word
    /// phrases like "not working" match as contiguous literals.
    pub fn new(tables: &[(L, &[&str])], fallback: L) -> Self {
        let entries = tables
            .iter()
            .map(|(label, phrases)| LexiconEntry {
                label: *label,
                matchers: phrases.iter().map(|phrase| compile_phrase(phrase)).collect(),
            })
            .collect();

        Self { entries, fallback }
    }

    /// Labels in declared order
    pub fn labels(&self) -> Vec<L> {
        self.entries.iter().map(|entry| entry.label).collect()
    }

    /// Label returned when no keyword matches
    pub fn fallback(&self) -> L {
        self.fallback
    }

    /// Count keyword hits per label, in declared order
    pub fn score(&self, text: &str) -> Vec<(L, usize)> {
        self.entries
            .iter()
            .map(|entry| (entry.label, entry.count_hits(text)))
            .collect()
    }

    /// Label with the strictly highest count; the fallback when all counts are 0.
    ///
    /// Equal top counts resolve to the first-declared label, since a later
    /// entry replaces the winner only on a strictly greater count.
    pub fn pick(&self, scores: &[(L, usize)]) -> L {
        let mut best_label = self.fallback;
        let mut best_count = 0;

        for &(label, count) in scores {
            if count > best_count {
                best_count = count;
                best_label = label;
            }
        }

        best_label
    }

    /// Score the text and pick the winning label
    pub fn classify(&self, text: &str) -> L {
        self.pick(&self.score(text))
    }
}

fn compile_phrase(phrase: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
        .expect("Invalid regex: keyword phrase")
}

// Compiled once at first use
static CATEGORY_LEXICON: LazyLock<Lexicon<Category>> = LazyLock::new(|| {
    Lexicon::new(
        &[
            (Category::Bug, BUG_KEYWORDS),
            (Category::Feature, FEATURE_KEYWORDS),
            (Category::Query, QUERY_KEYWORDS),
        ],
        Category::Query,
    )
});

static PRIORITY_LEXICON: LazyLock<Lexicon<Priority>> = LazyLock::new(|| {
    Lexicon::new(
        &[
            (Priority::High, HIGH_KEYWORDS),
            (Priority::Medium, MEDIUM_KEYWORDS),
            (Priority::Low, LOW_KEYWORDS),
        ],
        Priority::Medium,
    )
});

/// Process-wide category lexicon
pub fn category_lexicon() -> &'static Lexicon<Category> {
    &CATEGORY_LEXICON
}

/// Process-wide priority lexicon
pub fn priority_lexicon() -> &'static Lexicon<Priority> {
    &PRIORITY_LEXICON
}
