//! MDAST-based slide rendering.
//!
//! Converts one slide's Markdown fragment into an HTML string, with fenced
//! code routed through the highlighting seam.
//!
//! # Module Structure
//!
//! - `context` - Rendering state tracked during traversal
//! - `render` - AST node rendering functions

mod context;
mod render;

use crate::highlight::Highlighter;
use context::RenderContext;
use render::{collect_definitions, render_node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Rendering options for slide HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Whether GitHub Flavored Markdown constructs (tables, strikethrough,
    /// task lists, footnotes, autolink literals) are enabled.
    #[serde(default = "default_true")]
    pub gfm: bool,
    /// Whether raw HTML passes through unchanged. When disabled, raw tags
    /// become visible escaped text.
    #[serde(default = "default_true")]
    pub allow_raw_html: bool,
    /// Whether images get `loading="lazy"`.
    #[serde(default)]
    pub lazy_images: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            gfm: true,
            allow_raw_html: true,
            lazy_images: false,
        }
    }
}

/// Errors emitted while rendering a slide fragment.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The Markdown parser rejected the fragment.
    #[error("markdown parse error: {0}")]
    Parse(String),
}

/// Renders one slide's Markdown fragment to an HTML string.
///
/// Fenced code blocks go through `highlighter`, keyed by the fence's
/// normalized language tag; a declined highlight falls back to escaped
/// plain code.
///
/// # Examples
///
/// ```
/// use slidedown_render::{NoHighlight, Options, render_slide};
///
/// let html = render_slide("# Title", &Options::default(), &NoHighlight).unwrap();
/// assert_eq!(html, "<h1>Title</h1>");
/// ```
pub fn render_slide(
    input: &str,
    options: &Options,
    highlighter: &dyn Highlighter,
) -> Result<String, RenderError> {
    // 1. Parse to MDAST
    let tree = markdown::to_mdast(input, &parse_options(options))
        .map_err(|e| RenderError::Parse(e.to_string()))?;

    // 2. Collect link/image definitions so references resolve in any order
    let mut definitions = HashMap::new();
    collect_definitions(&tree, &mut definitions);

    // 3. Traverse and render
    let mut ctx = RenderContext::new(options, highlighter, definitions);
    render_node(&tree, &mut ctx);

    // 4. Flush collected footnotes
    Ok(ctx.finish())
}

fn parse_options(options: &Options) -> markdown::ParseOptions {
    // CommonMark defaults keep html_flow/html_text on; render_html decides
    // whether raw HTML passes through or gets escaped.
    let constructs = markdown::Constructs {
        // Frontmatter is split off before pagination, never parsed here.
        frontmatter: false,
        gfm_autolink_literal: options.gfm,
        gfm_footnote_definition: options.gfm,
        gfm_label_start_footnote: options.gfm,
        gfm_strikethrough: options.gfm,
        gfm_table: options.gfm,
        gfm_task_list_item: options.gfm,
        ..markdown::Constructs::default()
    };
    markdown::ParseOptions {
        constructs,
        ..markdown::ParseOptions::default()
    }
}
