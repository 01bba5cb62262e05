//! File-based source provider with permissive decoding fallback.

use std::path::Path;

use crate::error::RulesError;

/// Decoded content of one source, with a degradation marker.
#[derive(Debug)]
pub struct SourceContent {
    pub text: String,
    /// True when the primary UTF-8 decode failed and the content was
    /// recovered with the Latin-1 fallback.
    pub degraded: bool,
}

/// Provider that loads rule-list sources from local files.
pub struct FileProvider;

impl FileProvider {
    /// Read and decode a source file.
    ///
    /// UTF-8 is tried first. On failure the bytes are re-decoded as
    /// Latin-1, which maps every byte to a character and therefore cannot
    /// fail; the result is marked degraded instead of aborting the run.
    pub fn load(path: &Path) -> Result<SourceContent, RulesError> {
        let bytes = std::fs::read(path)?;
        Ok(Self::decode(&bytes))
    }

    /// Decode raw bytes, falling back to Latin-1 when UTF-8 fails.
    pub fn decode(bytes: &[u8]) -> SourceContent {
        match std::str::from_utf8(bytes) {
            Ok(text) => SourceContent {
                text: text.to_string(),
                degraded: false,
            },
            Err(_) => SourceContent {
                text: bytes.iter().map(|&b| b as char).collect(),
                degraded: true,
            },
        }
    }
}

/// Split a previously serialized artifact into its preserved header block
/// and the rule lines that follow.
///
/// Leading comment (`!`) and blank lines form the header; the first rule
/// line ends it. Comment lines after the header (section separators) are
/// skipped.
pub fn split_artifact(content: &str) -> (Vec<String>, Vec<String>) {
    let mut header = Vec::new();
    let mut rules = Vec::new();
    let mut in_header = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if in_header && (trimmed.is_empty() || trimmed.starts_with('!')) {
            header.push(trimmed.to_string());
            continue;
        }
        in_header = false;
        if !trimmed.is_empty() && !trimmed.starts_with('!') {
            rules.push(trimmed.to_string());
        }
    }

    (header, rules)
}
