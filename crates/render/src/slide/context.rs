//! Rendering context for the slide renderer.

use super::Options;
use crate::highlight::Highlighter;
use std::collections::HashMap;

/// Block scope the renderer is currently inside.
///
/// The top of the stack decides paragraph wrapping: a paragraph directly
/// inside a tight list item drops its `<p>` wrapper, while one nested
/// deeper (say, a blockquote inside the item) keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Scope {
    /// Inside a list; tight lists suppress item paragraph wrappers.
    List {
        /// Whether the list is tight (no blank lines between items).
        tight: bool,
    },
    /// Inside a blockquote.
    Blockquote,
}

/// A resolved `[identifier]: url "title"` definition.
#[derive(Debug, Clone)]
pub(super) struct LinkDefinition {
    /// Link or image destination.
    pub url: String,
    /// Optional title attribute.
    pub title: Option<String>,
}

/// Tracks rendering state while traversing one slide's AST.
pub(super) struct RenderContext<'a> {
    html: String,
    stack: Vec<Scope>,
    options: &'a Options,
    highlighter: &'a dyn Highlighter,
    definitions: HashMap<String, LinkDefinition>,
    /// Footnote identifiers in first-reference order; position + 1 is the
    /// displayed ordinal.
    footnote_order: Vec<String>,
    /// Collected footnote definitions as (identifier, inner HTML).
    pending_footnotes: Vec<(String, String)>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        options: &'a Options,
        highlighter: &'a dyn Highlighter,
        definitions: HashMap<String, LinkDefinition>,
    ) -> Self {
        Self {
            html: String::with_capacity(1024),
            stack: Vec::new(),
            options,
            highlighter,
            definitions,
            footnote_order: Vec::new(),
            pending_footnotes: Vec::new(),
        }
    }

    /// Writes raw HTML to the buffer without escaping.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes text content with HTML escaping.
    pub fn push_text(&mut self, s: &str) {
        html_escape::encode_text_to_string(s, &mut self.html);
    }

    /// Writes a double-quoted attribute value with HTML escaping.
    pub fn push_attr_value(&mut self, s: &str) {
        html_escape::encode_double_quoted_attribute_to_string(s, &mut self.html);
    }

    /// Enters a block scope.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Exits the innermost block scope.
    pub fn exit(&mut self) {
        self.stack.pop();
    }

    /// True when the innermost scope is a tight list, so item paragraphs
    /// render unwrapped.
    pub fn in_tight_list_item(&self) -> bool {
        matches!(self.stack.last(), Some(Scope::List { tight: true }))
    }

    /// Runs `render` with output diverted to a fresh buffer and returns that
    /// buffer. Scope and footnote state stay shared.
    pub fn capture<F: FnOnce(&mut Self)>(&mut self, render: F) -> String {
        let saved = std::mem::take(&mut self.html);
        render(self);
        std::mem::replace(&mut self.html, saved)
    }

    /// Looks up a link or image reference definition.
    pub fn definition(&self, identifier: &str) -> Option<&LinkDefinition> {
        self.definitions.get(identifier)
    }

    /// Ordinal for a footnote identifier, assigned in first-reference order.
    pub fn footnote_ordinal(&mut self, identifier: &str) -> usize {
        match self.footnote_order.iter().position(|known| known == identifier) {
            Some(position) => position + 1,
            None => {
                self.footnote_order.push(identifier.to_string());
                self.footnote_order.len()
            }
        }
    }

    /// Queues a footnote definition for the end-of-slide list.
    pub fn push_footnote(&mut self, identifier: String, inner_html: String) {
        self.pending_footnotes.push((identifier, inner_html));
    }

    /// Returns whether lazy image loading is enabled.
    pub fn lazy_images_enabled(&self) -> bool {
        self.options.lazy_images
    }

    /// Returns whether raw HTML passthrough is enabled.
    pub fn raw_html_allowed(&self) -> bool {
        self.options.allow_raw_html
    }

    /// Highlights `code` through the seam, or `None` when declined.
    pub fn highlight(&self, code: &str, language: &str) -> Option<String> {
        self.highlighter.highlight(code, language)
    }

    /// Consumes the context, appending the footnote list when one is due.
    ///
    /// Referenced definitions come first in reference order; unreferenced
    /// ones keep document order after them.
    pub fn finish(mut self) -> String {
        if !self.pending_footnotes.is_empty() {
            let order = std::mem::take(&mut self.footnote_order);
            self.pending_footnotes.sort_by_key(|(identifier, _)| {
                order
                    .iter()
                    .position(|known| known == identifier)
                    .unwrap_or(usize::MAX)
            });

            self.html.push_str("<section class=\"footnotes\"><ol>");
            for (_, inner_html) in &self.pending_footnotes {
                self.html.push_str("<li>");
                self.html.push_str(inner_html);
                self.html.push_str("</li>");
            }
            self.html.push_str("</ol></section>");
        }
        self.html
    }
}
