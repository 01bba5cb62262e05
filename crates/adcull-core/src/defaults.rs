//! Default configuration values.
//!
//! These are the single source of truth; `adcull-config` forwards its serde
//! default functions here.

/// Default target rule count for a reduced artifact.
pub const DEFAULT_TARGET_RULES: usize = 150_000;
/// Default lower bound on the reduced artifact size.
pub const DEFAULT_MIN_RULES: usize = 1_000;
/// Default upper bound on the reduced artifact size.
pub const DEFAULT_MAX_RULES: usize = 200_000;

/// Default title written into the artifact header.
pub const DEFAULT_TITLE: &str = "adcull merged rules";
/// Default description written into the artifact header.
pub const DEFAULT_DESCRIPTION: &str =
    "Merged, deduplicated AdGuard-compatible filter rules";
/// Default homepage written into the artifact header.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/adcull/adcull";

/// Default path of the full merged artifact.
pub const DEFAULT_MERGED_PATH: &str = "rules/merged_all.txt";
/// Default path of the reduced (lite) artifact.
pub const DEFAULT_LITE_PATH: &str = "rules/merged_lite.txt";
/// Default path of the pure-DNS reduced artifact.
pub const DEFAULT_DNS_LITE_PATH: &str = "rules/merged_dns_lite.txt";
