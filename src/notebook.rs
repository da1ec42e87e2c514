//! Best-effort code extraction from notebook text.
//!
//! A notebook is parsed as JSON into a minimal typed model; code cells with
//! non-blank source are sample candidates. When the typed parse yields
//! nothing (the file is not valid JSON, has no cells, or only blank code
//! cells), a fenced-code-block scan over the same raw text serves as a
//! fallback. Neither path reports an error: a notebook that cannot be
//! interpreted simply contributes no sample.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

/// Maximum sample length in characters before the ellipsis marker.
pub const SAMPLE_CHAR_LIMIT: usize = 500;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:python)?\s*(.*?)\s*```").expect("fenced block pattern is valid")
});

#[derive(Debug, Deserialize)]
struct Notebook {
    #[serde(default)]
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    cell_type: String,
    source: Option<SourceText>,
}

// Notebook source is either one string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceText {
    Lines(Vec<String>),
    Whole(String),
}

impl SourceText {
    fn join(&self) -> String {
        match self {
            SourceText::Lines(lines) => lines.concat(),
            SourceText::Whole(text) => text.clone(),
        }
    }
}

/// Extracts at most one code sample from raw notebook text, untruncated.
pub fn extract_sample(raw: &str) -> Option<String> {
    code_cells(raw)
        .into_iter()
        .next()
        .or_else(|| fenced_blocks(raw).into_iter().next())
}

fn code_cells(raw: &str) -> Vec<String> {
    let Ok(notebook) = serde_json::from_str::<Notebook>(raw) else {
        return Vec::new();
    };
    notebook
        .cells
        .iter()
        .filter(|cell| cell.cell_type == "code")
        .filter_map(|cell| cell.source.as_ref().map(SourceText::join))
        .filter(|code| !code.trim().is_empty())
        .collect()
}

fn fenced_blocks(raw: &str) -> Vec<String> {
    FENCED_BLOCK
        .captures_iter(raw)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Truncates a sample to [`SAMPLE_CHAR_LIMIT`] characters, appending an
/// ellipsis marker. Counts characters, not bytes, so multi-byte content is
/// never split mid-codepoint.
pub fn truncate_sample(code: &str) -> String {
    match code.char_indices().nth(SAMPLE_CHAR_LIMIT) {
        Some((idx, _)) => format!("{}...", &code[..idx]),
        None => code.to_string(),
    }
}
