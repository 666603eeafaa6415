//! YAML frontmatter extraction for deck metadata.
//!
//! A deck may open with a `---` fenced YAML block carrying presentation
//! metadata. The block must be split off before pagination, otherwise its
//! closing fence reads as a slide delimiter.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use thiserror::Error;

/// Deck-level metadata carried by an optional leading YAML block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMeta {
    /// Deck title, used by the printable export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Author credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Unrecognized keys, preserved for embedding layers.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonValue>,
}

/// Result of splitting frontmatter off a document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterSplit {
    /// Parsed deck metadata.
    pub meta: DeckMeta,
    /// Byte offset inside the original document where the body begins.
    pub body_start: usize,
}

/// Errors emitted while extracting deck frontmatter.
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// Unclosed YAML fence (missing terminating `---`).
    #[error("unterminated frontmatter block: expected closing '---'")]
    Unterminated,
    /// YAML failed to parse or did not fit the metadata shape.
    #[error("frontmatter parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Top-level YAML node was not a mapping.
    #[error("frontmatter must be a YAML mapping at the top level")]
    NotAMapping,
}

/// Extracts a leading YAML frontmatter block from a document.
///
/// Returns `Ok(None)` when the document does not open with a `---` fence
/// (ignoring a BOM and leading blank lines). A `---` appearing later in the
/// document is pagination's business, not frontmatter's.
pub fn extract_frontmatter(input: &str) -> Result<Option<FrontmatterSplit>, FrontmatterError> {
    match find_meta_block(input)? {
        Some((block, body_start)) => {
            let meta = parse_meta_block(block)?;
            Ok(Some(FrontmatterSplit { meta, body_start }))
        }
        None => Ok(None),
    }
}

fn parse_meta_block(block: &str) -> Result<DeckMeta, FrontmatterError> {
    if block.trim().is_empty() {
        return Ok(DeckMeta::default());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(block)?;
    match value {
        serde_yaml::Value::Null => Ok(DeckMeta::default()),
        serde_yaml::Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

/// Walks lines by byte offset to locate the fenced block, so `body_start`
/// can index into the original input.
fn find_meta_block(input: &str) -> Result<Option<(&str, usize)>, FrontmatterError> {
    let (without_bom, bom_len) = strip_bom(input);
    let mut cursor = 0usize;

    // Skip leading blank lines before the opening fence.
    let block_start = loop {
        match next_line(without_bom, cursor) {
            Some((line, next_cursor)) => {
                if line.trim().is_empty() {
                    cursor = next_cursor;
                    continue;
                }
                if !is_meta_fence(line) {
                    return Ok(None);
                }
                break next_cursor;
            }
            None => return Ok(None),
        }
    };

    let mut scan = block_start;
    loop {
        match next_line(without_bom, scan) {
            Some((line, next_cursor)) => {
                if is_meta_fence(line) {
                    let block = without_bom[block_start..scan].trim_end_matches(['\r', '\n']);
                    return Ok(Some((block, bom_len + next_cursor)));
                }
                scan = next_cursor;
            }
            None => return Err(FrontmatterError::Unterminated),
        }
    }
}

fn strip_bom(input: &str) -> (&str, usize) {
    match input.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped, '\u{feff}'.len_utf8()),
        None => (input, 0),
    }
}

fn next_line(input: &str, start: usize) -> Option<(&str, usize)> {
    if start >= input.len() {
        return None;
    }

    let bytes = &input.as_bytes()[start..];
    match bytes.iter().position(|b| *b == b'\n') {
        Some(pos) => {
            let line_end = start + pos;
            Some((&input[start..line_end], line_end + 1))
        }
        None => Some((&input[start..], input.len())),
    }
}

/// The frontmatter fence is exactly three hyphens; longer runs belong to
/// pagination.
fn is_meta_fence(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}
