#![deny(missing_docs)]
//! slidedown render: slide Markdown to HTML, theming, scaling, and export.

/// Printable whole-deck export.
pub mod export;
/// Syntax highlighting seam.
pub mod highlight;
/// Slide scaling math.
pub mod scale;
/// Slide rendering (MDAST-based).
pub mod slide;
/// Deck stylesheet assembly.
pub mod theme;

pub use export::render_document;
pub use highlight::{DEFAULT_LANGUAGE, Highlighter, NoHighlight, normalize_language};
pub use scale::{DESIGN_HEIGHT, DESIGN_WIDTH, fit_scale};
pub use slide::{Options, RenderError, render_slide};
pub use theme::{DEFAULT_CODE_THEME, DEFAULT_SLIDE_THEME, Theme, deck_style};
