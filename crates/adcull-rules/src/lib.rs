//! Rule corpus reduction engine for adcull.
//!
//! Takes a multiset of raw filter-list lines, normalizes and deduplicates
//! them, classifies each unique rule by syntactic category, and — when the
//! corpus exceeds a target size — deterministically selects the
//! highest-value subset under hard size bounds. Output is byte-for-byte
//! reproducible across runs on identical input.
//!
//! # Architecture
//!
//! - **Normalizer**: [`normalize::normalize`] canonicalizes a raw line
//!   (comment stripping, `$`-option sorting) into a comparable key
//! - **Deduplicator**: [`RuleSet`] (FxHashSet + first-seen order)
//! - **Categorizer**: [`rule::categorize`] with ordered precedence
//! - **Scorer**: [`score::score`] (Aho-Corasick keyword matching)
//! - **Selector**: [`select::select`] under a validated [`Budget`]
//! - **Serializer**: [`serialize::serialize`] with stable section order
//!
//! # Example
//!
//! ```
//! use adcull_rules::{Budget, merge_contents, reduce};
//!
//! let sources = [
//!     ("list-a", "||ads.example.com^\n@@||safe.example.com^\n"),
//!     ("list-b", "||ads.example.com^\n! a comment\n"),
//! ];
//! let (rules, stats) = merge_contents(sources).unwrap();
//! assert_eq!(rules.len(), 2);
//! assert_eq!(stats.duplicate_lines, 1);
//!
//! let budget = Budget::new(10, 1, 10).unwrap();
//! let (selected, _) = reduce(&rules, budget);
//! assert_eq!(selected.len(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod normalize;
pub mod provider;
pub mod rule;
pub mod ruleset;
pub mod score;
pub mod select;
pub mod serialize;

pub use engine::{corpus_from_artifact, merge_contents, merge_files, reduce};
pub use error::RulesError;
pub use rule::Category;
pub use ruleset::{MergeStats, RuleSet};
pub use select::{Budget, ReduceStats, SelectedRules};
pub use serialize::Header;
