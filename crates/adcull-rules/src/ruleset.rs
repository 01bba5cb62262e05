//! The deduplicated rule corpus and ingestion statistics.

use rustc_hash::FxHashSet;

use crate::normalize::normalize;
use crate::rule::{Category, categorize};

/// Counters produced while ingesting sources.
///
/// Each ingestion step returns its own value; callers combine them with
/// [`MergeStats::absorb`]. There is no global mutable state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Sources that were read and merged.
    pub sources_loaded: usize,
    /// Sources skipped because they could not be read.
    pub sources_failed: usize,
    /// Sources that needed the permissive decoding fallback.
    pub sources_degraded: usize,
    /// Total raw lines seen.
    pub total_lines: usize,
    /// Comment lines (leading `!`).
    pub comment_lines: usize,
    /// Blank lines and lines that normalized to nothing.
    pub empty_lines: usize,
    /// Lines whose normalized form was already in the set.
    pub duplicate_lines: usize,
}

impl MergeStats {
    /// Fold another stats value into this one.
    pub fn absorb(&mut self, other: MergeStats) {
        self.sources_loaded += other.sources_loaded;
        self.sources_failed += other.sources_failed;
        self.sources_degraded += other.sources_degraded;
        self.total_lines += other.total_lines;
        self.comment_lines += other.comment_lines;
        self.empty_lines += other.empty_lines;
        self.duplicate_lines += other.duplicate_lines;
    }
}

/// The deduplicated corpus: each normalized rule at most once, tagged with
/// its category, in first-seen order.
///
/// Membership is keyed on the full normalized string. First-seen order is
/// not needed for correctness but keeps intermediate output reproducible
/// for a given input sequence.
#[derive(Debug, Default)]
pub struct RuleSet {
    order: Vec<(String, Category)>,
    seen: FxHashSet<String>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-normalized rule. Returns `true` if newly added.
    pub fn insert(&mut self, rule: String) -> bool {
        if self.seen.contains(&rule) {
            return false;
        }
        let category = categorize(&rule);
        self.seen.insert(rule.clone());
        self.order.push((rule, category));
        true
    }

    /// Ingest one source's content line by line, returning the per-source
    /// line counters. Raw content is not retained.
    pub fn ingest(&mut self, content: &str) -> MergeStats {
        let mut stats = MergeStats::default();
        for line in content.lines() {
            stats.total_lines += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                stats.empty_lines += 1;
                continue;
            }
            if trimmed.starts_with('!') {
                stats.comment_lines += 1;
                continue;
            }
            match normalize(trimmed) {
                Some(rule) => {
                    if !self.insert(rule) {
                        stats.duplicate_lines += 1;
                    }
                }
                None => stats.empty_lines += 1,
            }
        }
        stats
    }

    /// Iterate rules with their categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.order.iter().map(|(r, c)| (r.as_str(), *c))
    }

    /// Number of unique rules.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the corpus holds no rules.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of rules in the given category.
    pub fn count_in(&self, category: Category) -> usize {
        self.order.iter().filter(|(_, c)| *c == category).count()
    }
}
