//! Importance scoring for reduction candidates.
//!
//! Scores are deterministic, pure per rule, and lower means more important
//! (kept preferentially). Keyword matching uses an Aho-Corasick automaton
//! built once over the fixed keyword list.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use rustc_hash::FxHashSet;

use crate::rule::Category;

/// Substrings that mark a rule as targeting tracking, advertising, or
/// security risks. Matching is case-insensitive; each keyword counts once.
const IMPORTANCE_KEYWORDS: &[&str] = &[
    "track",
    "analytic",
    "telemetry",
    "beacon",
    "metric",
    "pixel",
    "doubleclick",
    "adserv",
    "advert",
    "ads.",
    "banner",
    "popup",
    "malware",
    "phishing",
    "spyware",
];

/// Shapes that block an entire common zone; such rules are almost always
/// too broad for their cost.
const GENERIC_TLD_BLOCKS: &[&str] = &[
    "||com^", "||net^", "||org^", "||info^", "||xyz^", "*.com", "*.net", "*.org",
];

/// Patterns that would match everything; never worth keeping.
const DEGENERATE_PATTERNS: &[&str] = &["*", "*.*", ".*", "/*/"];

/// Element-hiding separators; such rules act on page markup and cannot be
/// enforced by a DNS-level consumer.
const ELEMENT_HIDING_MARKERS: &[&str] = &["##", "#@#", "#?#"];

static IMPORTANCE_AC: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(IMPORTANCE_KEYWORDS)
        .expect("valid patterns")
});

/// Number of distinct importance keywords present in the rule.
fn importance_hits(rule: &str) -> usize {
    let mut seen: FxHashSet<usize> = FxHashSet::default();
    for m in IMPORTANCE_AC.find_overlapping_iter(rule) {
        seen.insert(m.pattern().as_usize());
    }
    seen.len()
}

/// Number of generic TLD-block shapes present in the rule.
fn tld_hits(rule: &str) -> usize {
    let lower = rule.to_ascii_lowercase();
    GENERIC_TLD_BLOCKS
        .iter()
        .filter(|p| lower.contains(*p))
        .count()
}

/// Pre-filter: rules that fail this check are dropped from candidacy
/// entirely rather than scored.
///
/// A rule is ineffective when it is a known match-everything pattern, an
/// element-hiding rule, uses more than 3 wildcards, or has fewer than 3
/// characters of real content once wildcard, dot, anchor, and
/// regex-delimiter characters are removed.
pub fn is_effective(rule: &str) -> bool {
    if DEGENERATE_PATTERNS.contains(&rule) {
        return false;
    }
    if ELEMENT_HIDING_MARKERS.iter().any(|m| rule.contains(m)) {
        return false;
    }
    if rule.matches('*').count() > 3 {
        return false;
    }
    let core_len = rule
        .chars()
        .filter(|c| !matches!(c, '*' | '.' | '|' | '^' | '/'))
        .count();
    core_len >= 3
}

/// Compute the importance score of a reduction candidate.
///
/// Additive composition, lower = more important:
/// - `-50` for the domain-block shape `||...^`
/// - `-30 × min(keyword hits, 3)` for importance keywords
/// - `+20 × min(hits, 2)` for generic TLD-block shapes
/// - `-10` if shorter than 20 chars, `+15` if longer than 100
/// - `+5` if the rule contains a wildcard
/// - `-5` / `-20` for `third-party` / `important` modifier qualifiers
/// - `+10` for regex-category rules
pub fn score(rule: &str, category: Category) -> i32 {
    let mut score = 0i32;

    if rule.starts_with("||") && rule.ends_with('^') {
        score -= 50;
    }

    score -= 30 * importance_hits(rule).min(3) as i32;
    score += 20 * tld_hits(rule).min(2) as i32;

    let len = rule.chars().count();
    if len < 20 {
        score -= 10;
    } else if len > 100 {
        score += 15;
    }

    if rule.contains('*') {
        score += 5;
    }

    if let Some((_, options)) = rule.split_once('$') {
        let has = |q: &str| options.split(',').any(|t| t == q);
        if has("third-party") {
            score -= 5;
        }
        if has("important") {
            score -= 20;
        }
    }

    if category == Category::Regex {
        score += 10;
    }

    score
}
