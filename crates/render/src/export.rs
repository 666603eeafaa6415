//! Printable whole-deck export.
//!
//! The print view and static export both consume this: every slide rendered
//! in sequence into one standalone HTML document with the deck stylesheet
//! embedded unscaled.

use crate::highlight::Highlighter;
use crate::slide::{Options, RenderError, render_slide};
use crate::theme::{Theme, deck_style};
use slidedown_core::DeckState;

/// One slide per printed page.
const PRINT_RULES: &str = "@media print {\n  .slide {\n    page-break-after: always;\n  }\n}\n";

/// Renders every slide of a deck into one standalone HTML document.
///
/// The frontmatter title (when present) becomes the document title, and
/// `custom_css` rides along inside the embedded stylesheet.
pub fn render_document(
    deck: &DeckState,
    options: &Options,
    highlighter: &dyn Highlighter,
    custom_css: &str,
) -> Result<String, RenderError> {
    let title = deck.meta().title.as_deref().unwrap_or("slides");

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n<title>");
    html_escape::encode_text_to_string(title, &mut html);
    html.push_str("</title>\n<style>\n");
    html.push_str(&deck_style(&Theme::default(), 1.0, custom_css));
    html.push_str(PRINT_RULES);
    html.push_str("</style>\n</head>\n<body>\n");

    for page in deck.pages() {
        html.push_str("<section class=\"slide\">");
        html.push_str(&render_slide(page, options, highlighter)?);
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}
