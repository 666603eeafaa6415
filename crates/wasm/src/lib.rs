use serde::Serialize;
use slidedown_core::{
    CommandEffect, DeckCommand, DeckState, Movement, NavigationChange, ViewFlags,
    command_for_key, format_fragment, strip_common_indent,
};
use slidedown_render::{Highlighter, NoHighlight, Options, Theme, deck_style, fit_scale};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Deck Config
// ============================================================================

/// Configuration accepted by the `SlideDeck` constructor and the stateless
/// render functions. All fields are optional; camelCase aliases cover the
/// JavaScript spelling.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default, alias = "startFragment")]
    pub start_fragment: Option<String>,
    #[serde(default)]
    pub invert: Option<bool>,
    #[serde(default)]
    pub gfm: Option<bool>,
    #[serde(default, alias = "allowRawHtml")]
    pub allow_raw_html: Option<bool>,
    #[serde(default, alias = "lazyImages")]
    pub lazy_images: Option<bool>,
    #[serde(default, alias = "customCss")]
    pub custom_css: Option<String>,
}

fn parse_config(config: JsValue) -> Result<DeckConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(DeckConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))
}

fn render_options(cfg: &DeckConfig) -> Options {
    Options {
        gfm: cfg.gfm.unwrap_or(true),
        allow_raw_html: cfg.allow_raw_html.unwrap_or(true),
        lazy_images: cfg.lazy_images.unwrap_or(false),
    }
}

// ============================================================================
// Key Effect
// ============================================================================

/// What a handled key did, reported to the embedding layer so it repaints
/// the right surface. Both fields absent means the key was consumed without
/// a visible change.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeyEffect {
    /// Committed index change, when the key moved the deck.
    pub navigation: Option<NavigationChange>,
    /// New view flags, when the key toggled one.
    pub view: Option<ViewFlags>,
}

// ============================================================================
// Highlighter Adapter
// ============================================================================

/// Adapts a JavaScript `(code, language) => string | null` callback to the
/// highlighting seam. A thrown exception or non-string result is a decline,
/// which falls back to escaped plain code.
struct JsHighlighter<'a> {
    callback: &'a js_sys::Function,
}

impl Highlighter for JsHighlighter<'_> {
    fn highlight(&self, code: &str, language: &str) -> Option<String> {
        let result = self
            .callback
            .call2(
                &JsValue::NULL,
                &JsValue::from_str(code),
                &JsValue::from_str(language),
            )
            .ok()?;
        result.as_string()
    }
}

// ============================================================================
// Deck Handle
// ============================================================================

/// A slide deck instance owned by the embedding layer.
///
/// Holds the deck state (document, slide list, index, view flags) plus the
/// rendering options and the optional JavaScript callbacks for navigation
/// reports and syntax highlighting. One widget element owns one handle.
#[wasm_bindgen]
pub struct SlideDeck {
    state: DeckState,
    options: Options,
    custom_css: String,
    highlighter: Option<js_sys::Function>,
    on_navigate: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl SlideDeck {
    /// Creates a deck from a config object; `undefined`/`null` means all
    /// defaults. A malformed config is an error, not a silent default.
    ///
    /// # Example (JavaScript)
    ///
    /// ```javascript
    /// import { SlideDeck } from './slidedown_wasm';
    ///
    /// const deck = new SlideDeck({
    ///   markdown: '# One\n---\n# Two',
    ///   startFragment: location.hash,
    /// });
    ///
    /// deck.setOnNavigate(() => { location.hash = deck.fragment(); });
    /// slideHost.innerHTML = deck.renderCurrent();
    /// // deck.pageCount() === 2
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SlideDeck, JsError> {
        let cfg = parse_config(config)?;

        let mut state = DeckState::new();
        if let Some(markdown) = &cfg.markdown {
            state.apply_document(markdown);
        }
        if let Some(fragment) = &cfg.start_fragment {
            state.apply_start_fragment(fragment);
        }
        if cfg.invert.unwrap_or(false) {
            state.apply_command(DeckCommand::ToggleInvert);
        }

        Ok(SlideDeck {
            options: render_options(&cfg),
            custom_css: cfg.custom_css.unwrap_or_default(),
            state,
            highlighter: None,
            on_navigate: None,
        })
    }

    /// Replaces the markdown source, repaginating and re-clamping the index.
    ///
    /// # Returns
    ///
    /// `{ pageCount, navigation }` where `navigation` carries the forced
    /// index change when the new document is shorter, else undefined.
    #[wasm_bindgen(js_name = setMarkdown)]
    pub fn set_markdown(&mut self, markdown: &str) -> Result<JsValue, JsError> {
        let update = self.state.apply_document(markdown);
        if let Some(change) = update.navigation {
            self.emit_navigation(change);
        }
        serde_wasm_bindgen::to_value(&update)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Loads markdown from an embedded `<script type="text/markdown">` body,
    /// stripping the indentation the host page added.
    #[wasm_bindgen(js_name = setEmbeddedMarkdown)]
    pub fn set_embedded_markdown(&mut self, text: &str) -> Result<JsValue, JsError> {
        self.set_markdown(&strip_common_indent(text))
    }

    /// Advances one slide. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        self.apply(Movement::Next)
    }

    /// Backs up one slide. Returns whether the index moved.
    pub fn prev(&mut self) -> bool {
        self.apply(Movement::Prev)
    }

    /// Jumps to the first slide. Returns whether the index moved.
    pub fn first(&mut self) -> bool {
        self.apply(Movement::First)
    }

    /// Jumps to the last slide. Returns whether the index moved.
    pub fn last(&mut self) -> bool {
        self.apply(Movement::Last)
    }

    /// Jumps to an absolute slide, clamped into range. Returns whether the
    /// index moved.
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, target: i32) -> bool {
        self.apply(Movement::Goto(target as isize))
    }

    /// Handles a keyboard event.
    ///
    /// # Arguments
    ///
    /// * `code` - The `KeyboardEvent.code` value
    /// * `shift` - Whether shift was held (reverses direction keys)
    ///
    /// # Returns
    ///
    /// `undefined` for unmapped keys (let the event propagate); otherwise a
    /// `KeyEffect` object, and the host should call `preventDefault`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, code: &str, shift: bool) -> Result<JsValue, JsError> {
        let Some(command) = command_for_key(code, shift) else {
            return Ok(JsValue::UNDEFINED);
        };
        let effect = match self.state.apply_command(command) {
            CommandEffect::Navigated(change) => {
                self.emit_navigation(change);
                KeyEffect {
                    navigation: Some(change),
                    view: None,
                }
            }
            CommandEffect::ViewChanged(view) => KeyEffect {
                navigation: None,
                view: Some(view),
            },
            CommandEffect::Unchanged => KeyEffect {
                navigation: None,
                view: None,
            },
        };
        serde_wasm_bindgen::to_value(&effect)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Seeds the index from a location hash (e.g. "#3"); malformed values
    /// mean slide 0. Returns whether the index moved.
    #[wasm_bindgen(js_name = applyFragment)]
    pub fn apply_fragment(&mut self, fragment: &str) -> bool {
        match self.state.apply_start_fragment(fragment) {
            Some(change) => {
                self.emit_navigation(change);
                true
            }
            None => false,
        }
    }

    /// Location hash for the current slide ("#3").
    pub fn fragment(&self) -> String {
        format_fragment(self.state.index())
    }

    /// Current slide index.
    pub fn index(&self) -> usize {
        self.state.index()
    }

    /// Number of slides.
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.state.page_count()
    }

    /// Markdown source of slide `index`, or undefined when out of range.
    pub fn page(&self, index: usize) -> Option<String> {
        self.state.page(index).map(str::to_string)
    }

    /// Markdown source of the current slide, or undefined for an empty deck.
    #[wasm_bindgen(js_name = currentPage)]
    pub fn current_page(&self) -> Option<String> {
        self.state.current_page().map(str::to_string)
    }

    /// Frontmatter title, or undefined when absent.
    pub fn title(&self) -> Option<String> {
        self.state.meta().title.clone()
    }

    /// Frontmatter metadata as a JSON string ("{}" when absent).
    #[wasm_bindgen(js_name = metaJson)]
    pub fn meta_json(&self) -> String {
        serde_json::to_string(self.state.meta()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Renders the current slide to HTML. An empty deck renders to an empty
    /// string, so the widget shows nothing rather than erroring.
    #[wasm_bindgen(js_name = renderCurrent)]
    pub fn render_current(&self) -> Result<String, JsError> {
        match self.state.current_page() {
            Some(page) => self.render_markdown(page),
            None => Ok(String::new()),
        }
    }

    /// Renders slide `index` to HTML; out of range renders to an empty
    /// string.
    #[wasm_bindgen(js_name = renderPage)]
    pub fn render_page(&self, index: usize) -> Result<String, JsError> {
        match self.state.page(index) {
            Some(page) => self.render_markdown(page),
            None => Ok(String::new()),
        }
    }

    /// Renders the whole deck as one printable HTML document.
    #[wasm_bindgen(js_name = renderDocument)]
    pub fn render_document(&self) -> Result<String, JsError> {
        let result = match &self.highlighter {
            Some(callback) => slidedown_render::render_document(
                &self.state,
                &self.options,
                &JsHighlighter { callback },
                &self.custom_css,
            ),
            None => slidedown_render::render_document(
                &self.state,
                &self.options,
                &NoHighlight,
                &self.custom_css,
            ),
        };
        result.map_err(|e| JsError::new(&format!("Render error: {}", e)))
    }

    /// Deck stylesheet for a measured container, scale included.
    #[wasm_bindgen(js_name = deckCss)]
    pub fn deck_css(&self, width: f64, height: f64) -> String {
        deck_style(&Theme::default(), fit_scale(width, height), &self.custom_css)
    }

    /// Current view flags as `{ inverted, printing, editing }`.
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.state.view())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Toggles inverted colors; returns the new value.
    #[wasm_bindgen(js_name = toggleInvert)]
    pub fn toggle_invert(&mut self) -> bool {
        self.state.apply_command(DeckCommand::ToggleInvert);
        self.state.view().inverted
    }

    /// Toggles the print view; returns the new value.
    #[wasm_bindgen(js_name = togglePrint)]
    pub fn toggle_print(&mut self) -> bool {
        self.state.apply_command(DeckCommand::TogglePrint);
        self.state.view().printing
    }

    /// Toggles the inline editor; returns the new value.
    #[wasm_bindgen(js_name = toggleEditor)]
    pub fn toggle_editor(&mut self) -> bool {
        self.state.apply_command(DeckCommand::ToggleEditor);
        self.state.view().editing
    }

    /// Subscribes a callback invoked with `{ from, to }` after every
    /// committed index change, whatever triggered it.
    #[wasm_bindgen(js_name = setOnNavigate)]
    pub fn set_on_navigate(&mut self, callback: js_sys::Function) {
        self.on_navigate = Some(callback);
    }

    /// Removes the navigation callback.
    #[wasm_bindgen(js_name = clearOnNavigate)]
    pub fn clear_on_navigate(&mut self) {
        self.on_navigate = None;
    }

    /// Installs a `(code, language) => string | null` highlighter callback.
    #[wasm_bindgen(js_name = setHighlighter)]
    pub fn set_highlighter(&mut self, callback: js_sys::Function) {
        self.highlighter = Some(callback);
    }

    /// Removes the highlighter callback; code renders as escaped plain text.
    #[wasm_bindgen(js_name = clearHighlighter)]
    pub fn clear_highlighter(&mut self) {
        self.highlighter = None;
    }
}

impl SlideDeck {
    /// Applies a movement, notifying the navigation callback on a committed
    /// change. Returns whether the index moved.
    fn apply(&mut self, movement: Movement) -> bool {
        match self.state.apply_movement(movement) {
            Some(change) => {
                self.emit_navigation(change);
                true
            }
            None => false,
        }
    }

    /// Fire-and-forget report: a throwing callback never blocks or reverts
    /// the index change it describes.
    fn emit_navigation(&self, change: NavigationChange) {
        if let Some(callback) = &self.on_navigate {
            let payload = serde_wasm_bindgen::to_value(&change).unwrap_or(JsValue::NULL);
            let _ = callback.call1(&JsValue::NULL, &payload);
        }
    }

    fn render_markdown(&self, markdown: &str) -> Result<String, JsError> {
        let result = match &self.highlighter {
            Some(callback) => slidedown_render::render_slide(
                markdown,
                &self.options,
                &JsHighlighter { callback },
            ),
            None => slidedown_render::render_slide(markdown, &self.options, &NoHighlight),
        };
        result.map_err(|e| JsError::new(&format!("Render error: {}", e)))
    }
}

// ============================================================================
// Stateless API
// ============================================================================

/// Splits markdown into slide sources without constructing a deck.
///
/// # Returns
///
/// A JavaScript array of strings, one per slide.
#[wasm_bindgen]
pub fn paginate(markdown: &str) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&slidedown_core::paginate(markdown))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Renders one slide's markdown to HTML without constructing a deck.
///
/// `config` accepts the same shape as the `SlideDeck` constructor; only the
/// rendering fields (gfm, allowRawHtml, lazyImages) apply here.
#[wasm_bindgen(js_name = renderSlide)]
pub fn render_slide(markdown: &str, config: JsValue) -> Result<String, JsError> {
    let cfg = parse_config(config)?;
    slidedown_render::render_slide(markdown, &render_options(&cfg), &NoHighlight)
        .map_err(|e| JsError::new(&format!("Render error: {}", e)))
}
