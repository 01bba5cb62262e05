//! CLI argument definitions and command entry points.
//!
//! `run_merge` and `run_optimize` wire the config layer to the reduction
//! engine; they are the only places that touch the filesystem for output.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use time::OffsetDateTime;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter,
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use adcull_config::{
    CliOverrides, Config, LoggingConfig, apply_overrides, load_config, validate_config,
};
use adcull_core::errors::{ERROR_EMPTY, ERROR_IO};
use adcull_rules::provider::FileProvider;
use adcull_rules::{
    Budget, Header, SelectedRules, corpus_from_artifact, merge_files, reduce, serialize,
};

/// `adcull merge` arguments.
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Config file path (json/yaml/toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Source files or directories of rule lists
    #[arg(short, long, required = true, num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output path for the merged artifact
    #[arg(short, long, default_value = adcull_core::DEFAULT_MERGED_PATH)]
    pub output: PathBuf,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// `adcull optimize` arguments.
#[derive(Parser, Debug, Clone)]
pub struct OptimizeArgs {
    /// Config file path (json/yaml/toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Merged artifact to reduce
    #[arg(short, long, default_value = adcull_core::DEFAULT_MERGED_PATH)]
    pub input: PathBuf,

    /// Output path for the reduced artifact
    #[arg(short, long, default_value = adcull_core::DEFAULT_LITE_PATH)]
    pub output: PathBuf,

    /// Output path for the pure-DNS reduced artifact
    #[arg(long, default_value = adcull_core::DEFAULT_DNS_LITE_PATH)]
    pub dns_output: PathBuf,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Merge and deduplicate source lists into one full artifact.
pub fn run_merge(args: MergeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = prepare_config(args.config.as_deref(), &args.overrides)?;
    init_tracing(&config.logging);

    let paths = expand_inputs(&args.input)?;
    let (rules, stats) = merge_files(&paths)?;
    info!(
        sources = stats.sources_loaded,
        failed = stats.sources_failed,
        total_lines = stats.total_lines,
        duplicates = stats.duplicate_lines,
        unique = rules.len(),
        "merge complete"
    );

    // The merge stage emits the whole corpus; reduction happens in
    // `optimize`.
    let selected = SelectedRules::all_of(&rules);
    let header = Header {
        title: config.output.title.clone(),
        description: config.output.description.clone(),
        homepage: config.output.homepage.clone(),
        generated_at: OffsetDateTime::now_utc(),
        input_count: rules.len(),
        source_count: stats.sources_loaded,
    };
    write_artifact(&args.output, &serialize::serialize(&header, &selected)?)?;
    info!(output = %args.output.display(), rules = selected.len(), "artifact written");
    Ok(())
}

/// Reduce a merged artifact under the configured size budget.
pub fn run_optimize(args: OptimizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = prepare_config(args.config.as_deref(), &args.overrides)?;
    init_tracing(&config.logging);

    let budget = Budget::new(
        config.budget.target,
        config.budget.minimum,
        config.budget.maximum,
    )?;

    let content = FileProvider::load(&args.input)?;
    if content.degraded {
        warn!(
            input = %args.input.display(),
            "merged artifact was not valid UTF-8; used permissive fallback"
        );
    }
    let rules = match corpus_from_artifact(&content.text) {
        Ok(rules) => rules,
        Err(e) => {
            warn!(
                input = %args.input.display(),
                error_kind = ERROR_EMPTY,
                "artifact contains no rules"
            );
            return Err(e.into());
        }
    };

    let (selected, stats) = reduce(&rules, budget);
    info!(
        input = stats.input_rules,
        allow_kept = stats.allow_kept,
        scored = stats.candidates_scored,
        dropped_ineffective = stats.dropped_ineffective,
        output = stats.output_rules,
        "reduction complete"
    );

    let header = Header {
        title: config.output.title.clone(),
        description: config.output.description.clone(),
        homepage: config.output.homepage.clone(),
        generated_at: OffsetDateTime::now_utc(),
        input_count: stats.input_rules,
        source_count: 1,
    };
    write_artifact(&args.output, &serialize::serialize(&header, &selected)?)?;
    info!(output = %args.output.display(), rules = selected.len(), "artifact written");

    // Secondary artifact for pure-DNS consumers, worth a separate file
    // only when it is at least 10% smaller than the lite output.
    let dns = selected.dns_subset();
    if dns_worth_writing(dns.len(), selected.len()) {
        let dns_header = Header {
            title: format!("{} (DNS only)", config.output.title),
            ..header
        };
        write_artifact(&args.dns_output, &serialize::serialize(&dns_header, &dns)?)?;
        info!(output = %args.dns_output.display(), rules = dns.len(), "pure-DNS artifact written");
    } else {
        info!(
            dns_rules = dns.len(),
            lite_rules = selected.len(),
            "pure-DNS subset barely differs from the lite artifact; skipped"
        );
    }
    Ok(())
}

/// True when the pure-DNS subset is at least 10% smaller than the lite
/// artifact.
fn dns_worth_writing(dns_len: usize, lite_len: usize) -> bool {
    dns_len * 10 < lite_len * 9
}

/// Load the config file if given, apply CLI overrides, validate.
fn prepare_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, overrides);
    validate_config(&config)?;
    Ok(config)
}

/// Expand directories into their contained files, sorted for a stable
/// ingestion order. Plain files pass through unchanged.
fn expand_inputs(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(input)?
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            paths.extend(entries);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

/// Write the artifact, creating parent directories as needed.
fn write_artifact(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!(
                dir = %parent.display(),
                error_kind = ERROR_IO,
                "could not create output directory: {e}"
            );
            return Err(e);
        }
    }
    std::fs::write(path, content)
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
/// - `output`: Output target (stdout, stderr). Default: stderr
/// - `filters`: Per-module log level overrides
fn init_tracing(config: &LoggingConfig) {
    let base_level = config.level.as_deref().unwrap_or("info");
    let mut filter_str = base_level.to_string();

    for (module, level) in &config.filters {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }

    let filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new("info"));

    let format = config.format.as_deref().unwrap_or("pretty");
    let output = config.output.as_deref().unwrap_or("stderr");

    match (format, output) {
        ("json", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stdout))
                .init();
        }
        ("json", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        ("compact", "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stdout))
                .init();
        }
        ("compact", _) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
        (_, "stdout") => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stdout))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_inputs_sorts_directory_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "||b.com^\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), "||a.com^\n").unwrap();
        let paths = expand_inputs(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.txt"));
        assert!(paths[1].ends_with("b.txt"));
    }

    #[test]
    fn expand_inputs_passes_files_through() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("rules.txt");
        std::fs::write(&file, "||a.com^\n").unwrap();
        let paths = expand_inputs(std::slice::from_ref(&file)).unwrap();
        assert_eq!(paths, vec![file]);
    }

    #[test]
    fn dns_artifact_written_only_when_meaningfully_smaller() {
        assert!(dns_worth_writing(50, 100));
        assert!(dns_worth_writing(89, 100));
        // At exactly 90% or above, the separate file is skipped.
        assert!(!dns_worth_writing(90, 100));
        assert!(!dns_worth_writing(100, 100));
        assert!(!dns_worth_writing(0, 0));
    }

    #[test]
    fn prepare_config_applies_overrides() {
        let overrides = CliOverrides {
            target: Some(500),
            minimum: Some(10),
            maximum: Some(600),
            ..CliOverrides::default()
        };
        let config = prepare_config(None, &overrides).unwrap();
        assert_eq!(config.budget.target, 500);
    }

    #[test]
    fn prepare_config_rejects_bad_budget() {
        let overrides = CliOverrides {
            target: Some(10),
            minimum: Some(100),
            maximum: Some(50),
            ..CliOverrides::default()
        };
        assert!(prepare_config(None, &overrides).is_err());
    }
}
