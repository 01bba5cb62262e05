//! Budgeted selection of the highest-value rule subset.

use tracing::{debug, warn};

use crate::error::RulesError;
use crate::rule::Category;
use crate::ruleset::RuleSet;
use crate::score::{is_effective, score};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Size bounds for a reduction pass.
///
/// Invariant, enforced at construction: `minimum <= target <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    target: usize,
    minimum: usize,
    maximum: usize,
}

impl Budget {
    /// Build a budget, rejecting misconfigured bounds up front.
    pub fn new(target: usize, minimum: usize, maximum: usize) -> Result<Self, RulesError> {
        if minimum > maximum {
            return Err(RulesError::InvalidBudget(format!(
                "minimum ({minimum}) exceeds maximum ({maximum})"
            )));
        }
        if target < minimum || target > maximum {
            return Err(RulesError::InvalidBudget(format!(
                "target ({target}) outside [{minimum}, {maximum}]"
            )));
        }
        Ok(Self {
            target,
            minimum,
            maximum,
        })
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    pub fn maximum(&self) -> usize {
        self.maximum
    }
}

/// Counters produced by a reduction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// Unique rules going in.
    pub input_rules: usize,
    /// Allow rules retained unconditionally.
    pub allow_kept: usize,
    /// Non-allow rules dropped by the effectiveness filter.
    pub dropped_ineffective: usize,
    /// Candidates that went through scoring (0 when the corpus fit).
    pub candidates_scored: usize,
    /// Rules in the final output.
    pub output_rules: usize,
}

/// The surviving rules, grouped by category and lexicographically sorted
/// within each group, ready for serialization.
#[derive(Debug, Default)]
pub struct SelectedRules {
    groups: [Vec<String>; 5],
}

impl SelectedRules {
    fn push(&mut self, rule: String, category: Category) {
        self.groups[category.index()].push(rule);
    }

    fn sort_groups(&mut self) {
        for group in &mut self.groups {
            group.sort_unstable();
        }
    }

    /// All rules in the given category, lexicographically sorted.
    pub fn group(&self, category: Category) -> &[String] {
        &self.groups[category.index()]
    }

    /// Total number of selected rules.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns true if nothing survived.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subset enforceable by a pure-DNS consumer: allow rules, `||host^`
    /// domain blocks, and IPv4 hosts mappings. Regex, cosmetic, and other
    /// URL-level rules cannot be applied at the DNS layer.
    pub fn dns_subset(&self) -> SelectedRules {
        let mut subset = SelectedRules::default();
        subset.groups[Category::Allow.index()] = self.group(Category::Allow).to_vec();
        subset.groups[Category::Domain.index()] = self.group(Category::Domain).to_vec();
        subset.groups[Category::Hosts.index()] = self
            .group(Category::Hosts)
            .iter()
            .filter(|rule| rule.starts_with("0.0.0.0 ") || rule.starts_with("127.0.0.1 "))
            .cloned()
            .collect();
        subset
    }

    /// Take every rule of a set unreduced (used when no reduction pass is
    /// wanted, e.g. when emitting the full merged artifact).
    pub fn all_of(rules: &RuleSet) -> Self {
        let mut selected = Self::default();
        for (rule, category) in rules.iter() {
            selected.push(rule.to_string(), category);
        }
        selected.sort_groups();
        selected
    }
}

/// Select the rules that survive under the given budget.
///
/// Allow rules are retained unconditionally; the remaining block budget is
/// filled with the best-scoring non-allow rules. Selection order is
/// `(score, rule text)` ascending, which makes repeated runs on identical
/// input byte-for-byte reproducible. Display order (lexicographic within
/// each category) is decoupled from selection order.
pub fn select(rules: &RuleSet, budget: Budget) -> (SelectedRules, ReduceStats) {
    let mut stats = ReduceStats {
        input_rules: rules.len(),
        ..ReduceStats::default()
    };

    let mut allow: Vec<&str> = Vec::new();
    let mut block: Vec<(&str, Category)> = Vec::new();
    for (rule, category) in rules.iter() {
        if category == Category::Allow {
            allow.push(rule);
        } else {
            block.push((rule, category));
        }
    }

    // Degenerate case: the allow rules alone blow the hard maximum. Keep
    // the first `maximum` lexicographically and drop everything else.
    if allow.len() > budget.maximum() {
        warn!(
            allow_count = allow.len(),
            maximum = budget.maximum(),
            "allow rules alone exceed the maximum; truncating explicit exceptions"
        );
        allow.sort_unstable();
        allow.truncate(budget.maximum());
        let mut selected = SelectedRules::default();
        for rule in allow {
            selected.push(rule.to_string(), Category::Allow);
        }
        stats.allow_kept = selected.len();
        stats.output_rules = selected.len();
        return (selected, stats);
    }

    stats.allow_kept = allow.len();

    // Remaining budget for non-allow rules, clamped into the hard bounds
    // and then into what is actually available.
    let available = (budget.target() as i64 - allow.len() as i64)
        .clamp(
            budget.minimum() as i64 - allow.len() as i64,
            budget.maximum() as i64 - allow.len() as i64,
        )
        .clamp(0, block.len() as i64) as usize;

    let mut selected = SelectedRules::default();
    for rule in &allow {
        selected.push(rule.to_string(), Category::Allow);
    }

    if block.len() <= available {
        // Corpus fits; no scoring pass.
        for (rule, category) in block {
            selected.push(rule.to_string(), category);
        }
    } else {
        let candidates: Vec<(&str, Category)> = block
            .into_iter()
            .filter(|(rule, _)| is_effective(rule))
            .collect();
        stats.dropped_ineffective = stats.input_rules - stats.allow_kept - candidates.len();
        stats.candidates_scored = candidates.len();

        let mut scored = score_candidates(&candidates);
        scored.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        debug!(
            candidates = scored.len(),
            kept = available.min(scored.len()),
            "scored reduction candidates"
        );

        for &(_, rule, category) in scored.iter().take(available) {
            selected.push(rule.to_string(), category);
        }
    }

    selected.sort_groups();
    stats.output_rules = selected.len();
    (selected, stats)
}

#[cfg(feature = "parallel")]
fn score_candidates<'a>(
    candidates: &[(&'a str, Category)],
) -> Vec<(i32, &'a str, Category)> {
    candidates
        .par_iter()
        .map(|&(rule, category)| (score(rule, category), rule, category))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_candidates<'a>(
    candidates: &[(&'a str, Category)],
) -> Vec<(i32, &'a str, Category)> {
    candidates
        .iter()
        .map(|&(rule, category)| (score(rule, category), rule, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ruleset(lines: &str) -> RuleSet {
        let mut set = RuleSet::new();
        set.ingest(lines);
        set
    }

    #[test]
    fn budget_invariants_enforced() {
        assert!(Budget::new(10, 1, 20).is_ok());
        assert!(Budget::new(10, 11, 9).is_err());
        assert!(Budget::new(5, 6, 20).is_err());
        assert!(Budget::new(25, 1, 20).is_err());
    }

    #[test]
    fn corpus_within_budget_passes_through() {
        let set = ruleset("||ads.example.com^\n@@||safe.example.com^\n");
        let budget = Budget::new(10, 1, 10).unwrap();
        let (selected, stats) = select(&set, budget);
        assert_eq!(selected.len(), 2);
        assert_eq!(stats.candidates_scored, 0);
        assert_eq!(stats.allow_kept, 1);
    }

    #[test]
    fn allow_rules_always_survive() {
        let set = ruleset(
            "@@||keep-one.example.com^\n\
             @@||keep-two.example.com^\n\
             ||block-a.example.com^\n\
             ||block-b.example.com^\n\
             ||block-c.example.com^\n",
        );
        let budget = Budget::new(3, 1, 3).unwrap();
        let (selected, _) = select(&set, budget);
        assert_eq!(selected.group(Category::Allow).len(), 2);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn reduction_is_deterministic() {
        let input = "||e.example.com^\n||d.example.com^\n||c.example.com^\n\
                     ||b.example.com^\n||a.example.com^\n";
        let budget = Budget::new(3, 1, 3).unwrap();
        let (first, _) = select(&ruleset(input), budget);
        let (second, _) = select(&ruleset(input), budget);
        assert_eq!(first.group(Category::Domain), second.group(Category::Domain));
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn ties_break_lexicographically() {
        // Identical scores; the first 3 in text order must win.
        let input = "||e.example.com^\n||d.example.com^\n||c.example.com^\n\
                     ||b.example.com^\n||a.example.com^\n";
        let budget = Budget::new(3, 1, 3).unwrap();
        let (selected, stats) = select(&ruleset(input), budget);
        assert_eq!(
            selected.group(Category::Domain),
            &[
                "||a.example.com^".to_string(),
                "||b.example.com^".to_string(),
                "||c.example.com^".to_string(),
            ]
        );
        assert_eq!(stats.candidates_scored, 5);
    }

    #[test]
    fn ineffective_rules_are_dropped_not_scored() {
        let set = ruleset("*\n*.*\n||ads-a.example.com^\n||ads-b.example.com^\n");
        let budget = Budget::new(1, 1, 1).unwrap();
        let (selected, stats) = select(&set, budget);
        assert_eq!(stats.dropped_ineffective, 2);
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn allow_overflow_truncates_lexicographically() {
        let set = ruleset("@@||c.example.com^\n@@||a.example.com^\n@@||b.example.com^\n");
        let budget = Budget::new(2, 1, 2).unwrap();
        let (selected, stats) = select(&set, budget);
        assert_eq!(
            selected.group(Category::Allow),
            &[
                "@@||a.example.com^".to_string(),
                "@@||b.example.com^".to_string(),
            ]
        );
        assert_eq!(stats.output_rules, 2);
    }

    #[test]
    fn output_stays_within_bounds() {
        let mut lines = String::new();
        for i in 0..50 {
            lines.push_str(&format!("||host-{i:02}.example.com^\n"));
        }
        let set = ruleset(&lines);
        let budget = Budget::new(10, 5, 20).unwrap();
        let (selected, _) = select(&set, budget);
        assert!(selected.len() >= 5 && selected.len() <= 20);
        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn dns_subset_keeps_only_dns_enforceable_rules() {
        let set = ruleset(
            "@@||safe.example.com^\n\
             ||ads.example.com^\n\
             0.0.0.0 tracker.example.com\n\
             127.0.0.1 beacon.example.com\n\
             ::1 local.example.com\n\
             /xyz[0-9]+/\n\
             plain-url-rule\n",
        );
        let budget = Budget::new(10, 1, 10).unwrap();
        let (selected, _) = select(&set, budget);
        let dns = selected.dns_subset();

        assert_eq!(dns.group(Category::Allow).len(), 1);
        assert_eq!(dns.group(Category::Domain).len(), 1);
        // IPv6 hosts mappings are dropped, IPv4 ones survive.
        assert_eq!(
            dns.group(Category::Hosts),
            &[
                "0.0.0.0 tracker.example.com".to_string(),
                "127.0.0.1 beacon.example.com".to_string(),
            ]
        );
        assert!(dns.group(Category::Regex).is_empty());
        assert!(dns.group(Category::Other).is_empty());
        assert_eq!(dns.len(), 4);
    }

    #[test]
    fn dns_subset_preserves_sorted_order() {
        let set = ruleset("||b.example.com^\n||a.example.com^\n");
        let (selected, _) = select(&set, Budget::new(10, 1, 10).unwrap());
        let dns = selected.dns_subset();
        assert_eq!(
            dns.group(Category::Domain),
            &[
                "||a.example.com^".to_string(),
                "||b.example.com^".to_string(),
            ]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_scoring_is_byte_stable() {
        // The parallel map phase must select exactly the same rules, in the
        // same order, as the sequential path; the expected list below is
        // the sequential answer.
        let input = "||e.example.com^\n||track.d.example.com^\n||c.example.com^\n\
                     ||b.example.com^\n||a.example.com^\n";
        let budget = Budget::new(3, 1, 3).unwrap();

        let (first, _) = select(&ruleset(input), budget);
        assert_eq!(
            first.group(Category::Domain),
            &[
                "||a.example.com^".to_string(),
                "||b.example.com^".to_string(),
                "||track.d.example.com^".to_string(),
            ]
        );

        let (second, _) = select(&ruleset(input), budget);
        assert_eq!(first.group(Category::Domain), second.group(Category::Domain));
    }

    #[test]
    fn small_corpus_returned_whole() {
        let set = ruleset("||a.example.com^\n||b.example.com^\n");
        let budget = Budget::new(10, 5, 20).unwrap();
        let (selected, _) = select(&set, budget);
        assert_eq!(selected.len(), 2);
    }
}
