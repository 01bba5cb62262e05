//! Artifact serialization: header block plus category-grouped sections.

use time::OffsetDateTime;
use time::macros::format_description;

use crate::error::RulesError;
use crate::rule::Category;
use crate::select::SelectedRules;

/// Metadata written into the artifact header.
///
/// The caller supplies `generated_at`, which keeps the serializer itself a
/// pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
    pub description: String,
    pub homepage: String,
    pub generated_at: OffsetDateTime,
    /// Unique rules before reduction.
    pub input_count: usize,
    /// Number of sources merged.
    pub source_count: usize,
}

/// Serialize the surviving rules into the output artifact.
///
/// Always uses `\n` line terminators regardless of platform so that
/// version-control diffs stay minimal. Sections appear in the fixed
/// category order; empty sections are omitted.
pub fn serialize(header: &Header, rules: &SelectedRules) -> Result<String, RulesError> {
    let version_fmt = format_description!("[year][month][day]");
    let modified_fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

    let output_count = rules.len();
    let reduction = if header.input_count > 0 {
        100.0 * (1.0 - output_count as f64 / header.input_count as f64)
    } else {
        0.0
    };

    let mut out = String::new();
    out.push_str(&format!("! Title: {}\n", header.title));
    out.push_str(&format!("! Description: {}\n", header.description));
    out.push_str(&format!(
        "! Version: {}\n",
        header.generated_at.format(&version_fmt)?
    ));
    out.push_str(&format!(
        "! Last modified: {}\n",
        header.generated_at.format(&modified_fmt)?
    ));
    out.push_str(&format!("! Rule count: {output_count}\n"));
    out.push_str(&format!("! Original count: {}\n", header.input_count));
    out.push_str(&format!("! Reduction: {reduction:.1}%\n"));
    out.push_str(&format!("! Source count: {}\n", header.source_count));
    out.push_str(&format!("! Homepage: {}\n", header.homepage));
    out.push_str("!===================================================\n");

    for category in Category::ALL {
        let group = rules.group(category);
        if group.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!(
            "! === {} ({}) ===\n",
            category.section_name(),
            group.len()
        ));
        for rule in group {
            out.push_str(rule);
            out.push('\n');
        }
    }

    Ok(out)
}
