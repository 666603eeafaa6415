//! Deck stylesheet assembly.
//!
//! The engine ships a default slide theme and code theme as CSS constants;
//! the embedding layer may swap either out and appends author CSS verbatim.
//! The computed scale rule comes last so nothing overrides the fit.

use crate::scale::{DESIGN_HEIGHT, DESIGN_WIDTH};

/// Stock typography for slide content.
pub const DEFAULT_SLIDE_THEME: &str = r#".slide {
  --font-family: "Source Sans Pro", sans-serif;
  font: 36px/1.6em var(--font-family);
}
h1 { font: 3.6em/1.6em var(--font-family) }
h2 { font: 2.4em/1.6em var(--font-family) }
h3 { font: 1.8em/1.6em var(--font-family) }
h4 { font: 1.4em/1.6em var(--font-family) }
h5 { font: 1.2em/1.6em var(--font-family) }
h1, h2, h3, h4, h5 {
  font-weight: bold;
  text-transform: uppercase;
  letter-spacing: -0.02em;
}
h6 {
  font-weight: normal;
  font-size: 2em;
  line-height: 1.8em;
  letter-spacing: -0.03em;
}
li {
  text-align: left;
}
code {
  display: inline-block;
  background: #E7E7E7;
  padding: 0 0.25em;
  margin: 0 0.1em;
  border-radius: 0.3em;
  line-height: 1.4em;
}
pre {
  margin: 0 0.2em;
  font-size: 24px;
}
pre code {
  padding: 0.7em 1.2em;
}
a {
  color: #25E;
  text-decoration: none;
}
a:hover {
  text-decoration: underline;
}
iframe {
  width: 100%;
  height: 100%;
  border: none;
}
"#;

/// Stock styling for fenced code blocks, with token colors matching the
/// grammar classes the highlighting seam targets.
pub const DEFAULT_CODE_THEME: &str = r#"pre code {
  display: block;
  background: #f5f2f0;
  color: #333;
  text-align: left;
  white-space: pre;
  word-spacing: normal;
  word-break: normal;
  tab-size: 4;
  hyphens: none;
  overflow: auto;
}
.token.comment, .token.prolog, .token.doctype, .token.cdata { color: #708090; }
.token.punctuation { color: #999; }
.token.property, .token.tag, .token.boolean, .token.number, .token.constant, .token.symbol { color: #905; }
.token.selector, .token.attr-name, .token.string, .token.char, .token.builtin { color: #690; }
.token.operator, .token.entity, .token.url { color: #9a6e3a; }
.token.atrule, .token.attr-value, .token.keyword { color: #07a; }
.token.function, .token.class-name { color: #DD4A68; }
.token.regex, .token.important, .token.variable { color: #e90; }
"#;

/// A deck's stylesheet pair: slide typography plus code block styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Slide typography and element rules.
    pub slide_css: String,
    /// Fenced code block rules.
    pub code_css: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            slide_css: DEFAULT_SLIDE_THEME.to_string(),
            code_css: DEFAULT_CODE_THEME.to_string(),
        }
    }
}

/// Assembles the deck stylesheet for a measured container.
///
/// Layout rules come first (host sizing, centering, the design box, invert
/// filters), then the theme, then `custom_css` verbatim so author rules win
/// ties against the theme, and the computed scale rule last.
pub fn deck_style(theme: &Theme, scale: f64, custom_css: &str) -> String {
    let mut css = format!(
        r#":host {{
  display: block;
  min-height: 400px;
}}
.invert {{
  filter: invert(100%);
}}
.invert img {{
  filter: invert(100%);
}}
.deck {{
  height: 100%;
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: white;
}}
.slide {{
  width: {DESIGN_WIDTH}px;
  height: {DESIGN_HEIGHT}px;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
}}
.slide > * {{
  margin: 0;
}}
.slide > p {{
  text-align: justify;
  margin-bottom: 5vh !important;
}}
"#
    );
    css.push_str(&theme.slide_css);
    css.push_str(&theme.code_css);
    if !custom_css.is_empty() {
        css.push_str(custom_css);
        if !custom_css.ends_with('\n') {
            css.push('\n');
        }
    }
    css.push_str(&format!(".slide {{ transform: scale({scale}) }}\n"));
    css
}
