//! Merge and reduce orchestration.
//!
//! The functional boundary exposed to the CLI: `merge_*` builds the
//! deduplicated corpus from sources, `reduce` applies the budgeted
//! selection. Both are synchronous, deterministic batch transforms.

use std::path::PathBuf;

use adcull_core::errors::{ERROR_DECODE, ERROR_IO};
use tracing::{debug, warn};

use crate::error::RulesError;
use crate::normalize::normalize;
use crate::provider::{FileProvider, split_artifact};
use crate::ruleset::{MergeStats, RuleSet};
use crate::select::{Budget, ReduceStats, SelectedRules, select};

/// Merge already-decoded sources into a deduplicated corpus.
///
/// Sources are processed one at a time; only the growing unique-rule set
/// persists across them. Fails with [`RulesError::NoInput`] when no source
/// is given and [`RulesError::EmptyCorpus`] when nothing contributed a
/// rule.
pub fn merge_contents<'a, I>(sources: I) -> Result<(RuleSet, MergeStats), RulesError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut rules = RuleSet::new();
    let mut stats = MergeStats::default();

    for (name, content) in sources {
        let before = rules.len();
        let source_stats = rules.ingest(content);
        debug!(
            source = name,
            lines = source_stats.total_lines,
            added = rules.len() - before,
            "merged source"
        );
        stats.absorb(source_stats);
        stats.sources_loaded += 1;
    }

    if stats.sources_loaded == 0 {
        return Err(RulesError::NoInput);
    }
    if rules.is_empty() {
        return Err(RulesError::EmptyCorpus);
    }
    Ok((rules, stats))
}

/// Merge source files from disk into a deduplicated corpus.
///
/// A single unreadable file is recoverable: it is logged, counted as
/// failed, and the run continues with the remaining sources. A source that
/// needed the permissive decoding fallback is merged but counted as
/// degraded.
pub fn merge_files(paths: &[PathBuf]) -> Result<(RuleSet, MergeStats), RulesError> {
    if paths.is_empty() {
        return Err(RulesError::NoInput);
    }

    let mut rules = RuleSet::new();
    let mut stats = MergeStats::default();

    for path in paths {
        let content = match FileProvider::load(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    source = %path.display(),
                    error_kind = ERROR_IO,
                    "skipping unreadable source: {e}"
                );
                stats.sources_failed += 1;
                continue;
            }
        };
        if content.degraded {
            warn!(
                source = %path.display(),
                error_kind = ERROR_DECODE,
                "source was not valid UTF-8; used permissive fallback"
            );
            stats.sources_degraded += 1;
        }
        let before = rules.len();
        let source_stats = rules.ingest(&content.text);
        debug!(
            source = %path.display(),
            lines = source_stats.total_lines,
            added = rules.len() - before,
            "merged source"
        );
        stats.absorb(source_stats);
        stats.sources_loaded += 1;
    }

    if rules.is_empty() {
        return Err(RulesError::EmptyCorpus);
    }
    Ok((rules, stats))
}

/// Rebuild a corpus from a previously serialized artifact.
///
/// Re-normalization is idempotent, so re-ingesting a serialized artifact
/// reconstructs the same corpus. An artifact that contributes no rules is
/// the distinct "no input" condition ([`RulesError::NoInput`]), not an
/// empty-corpus failure: the corpus was never assembled here.
pub fn corpus_from_artifact(content: &str) -> Result<RuleSet, RulesError> {
    let (_, rule_lines) = split_artifact(content);
    let mut rules = RuleSet::new();
    for line in &rule_lines {
        if let Some(rule) = normalize(line) {
            rules.insert(rule);
        }
    }
    if rules.is_empty() {
        return Err(RulesError::NoInput);
    }
    Ok(rules)
}

/// Reduce the corpus under the given budget.
///
/// When the corpus already fits, every rule passes through and no scoring
/// happens; the output only re-sorts rules per category for display.
pub fn reduce(rules: &RuleSet, budget: Budget) -> (SelectedRules, ReduceStats) {
    select(rules, budget)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_contents_dedups_across_sources() {
        let sources = [
            ("list-a", "||ads.example.com^\n@@||safe.example.com^\n"),
            ("list-b", "||ads.example.com^\n||tracker.example.com^\n"),
        ];
        let (rules, stats) = merge_contents(sources).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(stats.duplicate_lines, 1);
        assert_eq!(stats.sources_loaded, 2);
    }

    #[test]
    fn no_sources_is_fatal() {
        let err = merge_contents(std::iter::empty::<(&str, &str)>()).unwrap_err();
        assert!(matches!(err, RulesError::NoInput));
    }

    #[test]
    fn all_comment_sources_leave_empty_corpus() {
        let err = merge_contents([("a", "! only comments\n\n")]).unwrap_err();
        assert!(matches!(err, RulesError::EmptyCorpus));
    }

    #[test]
    fn merge_files_skips_unreadable_sources() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "||ads.example.com^\n").unwrap();
        let missing = dir.path().join("missing.txt");

        let (rules, stats) = merge_files(&[missing, good]).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(stats.sources_failed, 1);
        assert_eq!(stats.sources_loaded, 1);
    }

    #[test]
    fn merge_files_counts_degraded_sources() {
        let dir = tempfile::tempdir().unwrap();
        let latin = dir.path().join("latin.txt");
        std::fs::write(&latin, b"||caf\xe9.example.com^\n").unwrap();

        let (rules, stats) = merge_files(&[latin]).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(stats.sources_degraded, 1);
    }

    #[test]
    fn merge_files_with_no_paths_is_fatal() {
        assert!(matches!(merge_files(&[]), Err(RulesError::NoInput)));
    }

    #[test]
    fn artifact_round_trips_into_same_corpus() {
        let artifact = "! Title: x\n! Rule count: 2\n\n\
                        ! === DOMAIN (1) ===\n||a.example.com^\n\
                        ! === OTHER (1) ===\nplain-rule\n";
        let rules = corpus_from_artifact(artifact).unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn empty_artifact_is_no_input_not_empty_corpus() {
        let err = corpus_from_artifact("! Title: x\n! Rule count: 0\n").unwrap_err();
        assert!(matches!(err, RulesError::NoInput));
    }
}
