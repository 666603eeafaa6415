use js_sys::Function;
use serde::{Deserialize, Serialize};
use slidedown_wasm::{SlideDeck, paginate, render_slide};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct Config<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    markdown: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_fragment: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    invert: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_css: Option<&'a str>,
}

#[derive(Deserialize, Debug)]
struct NavChange {
    from: usize,
    to: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdateMirror {
    page_count: usize,
    #[serde(default)]
    navigation: Option<NavChange>,
}

#[derive(Deserialize, Debug)]
struct KeyEffectMirror {
    #[serde(default)]
    navigation: Option<NavChange>,
    #[serde(default)]
    view: Option<ViewMirror>,
}

#[derive(Deserialize, Debug)]
struct ViewMirror {
    inverted: bool,
    printing: bool,
    editing: bool,
}

fn deck(config: Config) -> SlideDeck {
    let config = serde_wasm_bindgen::to_value(&config).expect("serialize config");
    SlideDeck::new(config).expect("deck should construct")
}

fn deck_with(markdown: &str) -> SlideDeck {
    deck(Config {
        markdown: Some(markdown),
        ..Config::default()
    })
}

#[wasm_bindgen_test]
fn empty_deck_defaults() {
    let deck = SlideDeck::new(JsValue::UNDEFINED).expect("deck should construct");

    assert_eq!(deck.page_count(), 0);
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.fragment(), "#0");
    assert_eq!(deck.current_page(), None);
    assert_eq!(deck.title(), None);
    assert_eq!(deck.meta_json(), "{}");
    assert_eq!(deck.render_current().expect("render should succeed"), "");
}

#[wasm_bindgen_test]
fn config_seeds_document_and_fragment() {
    let deck = deck(Config {
        markdown: Some("# One\n---\n# Two\n---\n# Three"),
        start_fragment: Some("#2"),
        ..Config::default()
    });

    assert_eq!(deck.page_count(), 3);
    assert_eq!(deck.index(), 2);
    assert_eq!(deck.page(1), Some("# Two".to_string()));
    assert_eq!(deck.current_page(), Some("# Three".to_string()));
}

#[wasm_bindgen_test]
fn malformed_config_is_rejected() {
    assert!(SlideDeck::new(JsValue::from_str("nonsense")).is_err());
}

#[wasm_bindgen_test]
fn movements_clamp_at_edges() {
    let mut deck = deck_with("a\n---\nb\n---\nc");

    assert!(deck.next());
    assert!(deck.next());
    assert!(!deck.next(), "next at the last slide should not move");
    assert_eq!(deck.index(), 2);

    assert!(deck.prev());
    assert!(deck.prev());
    assert!(!deck.prev(), "prev at the first slide should not move");
    assert_eq!(deck.index(), 0);

    assert!(deck.last());
    assert_eq!(deck.index(), 2);
    assert!(deck.first());
    assert_eq!(deck.index(), 0);
}

#[wasm_bindgen_test]
fn go_to_clamps_out_of_range_targets() {
    let mut deck = deck_with("a\n---\nb\n---\nc");

    assert!(deck.go_to(99));
    assert_eq!(deck.index(), 2);

    assert!(deck.go_to(-5));
    assert_eq!(deck.index(), 0);

    assert!(!deck.go_to(-1), "clamped to the current slide, no move");
}

#[wasm_bindgen_test]
fn handle_key_reports_navigation() {
    let mut deck = deck_with("a\n---\nb");

    let effect = deck.handle_key("ArrowRight", false).expect("handle key");
    let effect: KeyEffectMirror = serde_wasm_bindgen::from_value(effect).expect("deserialize");
    let change = effect.navigation.expect("arrow should navigate");
    assert_eq!(change.from, 0);
    assert_eq!(change.to, 1);
    assert!(effect.view.is_none());
}

#[wasm_bindgen_test]
fn handle_key_reports_view_toggle() {
    let mut deck = deck_with("a");

    let effect = deck.handle_key("KeyI", false).expect("handle key");
    let effect: KeyEffectMirror = serde_wasm_bindgen::from_value(effect).expect("deserialize");
    assert!(effect.navigation.is_none());
    let view = effect.view.expect("KeyI should toggle a view flag");
    assert!(view.inverted);
    assert!(!view.printing);
    assert!(!view.editing);
}

#[wasm_bindgen_test]
fn unmapped_key_is_not_consumed() {
    let mut deck = deck_with("a\n---\nb");
    let effect = deck.handle_key("KeyQ", false).expect("handle key");
    assert!(effect.is_undefined());
    assert_eq!(deck.index(), 0);
}

#[wasm_bindgen_test]
fn shift_reverses_direction_keys() {
    let mut deck = deck_with("a\n---\nb");
    assert!(deck.next());

    let effect = deck.handle_key("ArrowRight", true).expect("handle key");
    let effect: KeyEffectMirror = serde_wasm_bindgen::from_value(effect).expect("deserialize");
    assert_eq!(effect.navigation.expect("should navigate back").to, 0);
}

#[wasm_bindgen_test]
fn fragment_round_trip() {
    let mut deck = deck_with("a\n---\nb\n---\nc");

    assert!(deck.apply_fragment("#5"), "over-range fragment clamps to last");
    assert_eq!(deck.index(), 2);
    assert_eq!(deck.fragment(), "#2");

    assert!(deck.apply_fragment("#junk"), "malformed fragment means slide 0");
    assert_eq!(deck.index(), 0);
}

#[wasm_bindgen_test]
fn navigation_callback_fires_on_committed_changes() {
    let mut deck = deck_with("a\n---\nb");
    let callback = Function::new_with_args("change", "globalThis.__lastNav = change;");
    deck.set_on_navigate(callback);

    assert!(deck.next());

    let global: JsValue = js_sys::global().into();
    let captured = js_sys::Reflect::get(&global, &JsValue::from_str("__lastNav"))
        .expect("callback should have stored the change");
    let change: NavChange = serde_wasm_bindgen::from_value(captured).expect("deserialize");
    assert_eq!(change.from, 0);
    assert_eq!(change.to, 1);
}

#[wasm_bindgen_test]
fn throwing_navigation_callback_does_not_block_moves() {
    let mut deck = deck_with("a\n---\nb");
    deck.set_on_navigate(Function::new_with_args("change", "throw new Error('boom');"));

    assert!(deck.next());
    assert_eq!(deck.index(), 1);
}

#[wasm_bindgen_test]
fn set_markdown_reports_shrink_reclamp() {
    let mut deck = deck_with("a\n---\nb\n---\nc\n---\nd");
    assert!(deck.last());

    let update = deck.set_markdown("x\n---\ny").expect("set markdown");
    let update: UpdateMirror = serde_wasm_bindgen::from_value(update).expect("deserialize");
    assert_eq!(update.page_count, 2);
    let change = update.navigation.expect("shrink should force a re-clamp");
    assert_eq!(change.from, 3);
    assert_eq!(change.to, 1);
    assert_eq!(deck.index(), 1);
}

#[wasm_bindgen_test]
fn embedded_markdown_is_dedented() {
    let mut deck = SlideDeck::new(JsValue::UNDEFINED).expect("deck should construct");
    let update = deck
        .set_embedded_markdown("\n      # Deck\n\n      ---\n\n      ## Two\n    ")
        .expect("set embedded markdown");
    let update: UpdateMirror = serde_wasm_bindgen::from_value(update).expect("deserialize");

    assert_eq!(update.page_count, 2);
    assert!(deck.page(0).expect("page 0").contains("# Deck"));
}

#[wasm_bindgen_test]
fn frontmatter_feeds_title_and_meta() {
    let deck = deck_with("---\ntitle: Launch Plan\nauthor: Ada\n---\n\n# Agenda");

    assert_eq!(deck.title(), Some("Launch Plan".to_string()));
    let meta = deck.meta_json();
    assert!(meta.contains("\"title\""));
    assert!(meta.contains("Launch Plan"));
    assert!(meta.contains("Ada"));
    assert_eq!(deck.page_count(), 1);
}

#[wasm_bindgen_test]
fn render_current_produces_slide_html() {
    let deck = deck_with("# One\n---\n## Two");
    assert_eq!(deck.render_current().expect("render"), "<h1>One</h1>");
    assert_eq!(deck.render_page(1).expect("render"), "<h2>Two</h2>");
    assert_eq!(deck.render_page(9).expect("render"), "");
}

#[wasm_bindgen_test]
fn highlighter_callback_wraps_code() {
    let mut deck = deck_with("```js\nlet x = 1;\n```");
    deck.set_highlighter(Function::new_with_args(
        "code, lang",
        "return '<span class=\"hl-' + lang + '\">' + code + '</span>';",
    ));

    let html = deck.render_current().expect("render");
    assert!(html.contains("language-javascript"));
    assert!(html.contains("<span class=\"hl-javascript\">let x = 1;</span>"));
}

#[wasm_bindgen_test]
fn throwing_highlighter_falls_back_to_escaped_code() {
    let mut deck = deck_with("```js\na < b\n```");
    deck.set_highlighter(Function::new_with_args("code, lang", "throw new Error('boom');"));

    let html = deck.render_current().expect("render");
    assert!(html.contains("a &lt; b"));
}

#[wasm_bindgen_test]
fn render_document_exports_every_slide() {
    let deck = deck_with("---\ntitle: Deck\n---\n\n# A\n---\n# B");
    let html = deck.render_document().expect("export");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Deck</title>"));
    assert_eq!(html.matches("<section class=\"slide\">").count(), 2);
}

#[wasm_bindgen_test]
fn deck_css_scales_to_the_container() {
    let deck = deck(Config {
        markdown: Some("# S"),
        custom_css: Some(".slide { color: red }"),
        ..Config::default()
    });

    let css = deck.deck_css(1000.0, 600.0);
    assert!(css.contains("transform: scale(0.9)"));
    assert!(css.contains(".slide { color: red }"));
}

#[wasm_bindgen_test]
fn view_toggles_report_new_values() {
    let mut deck = deck_with("a");

    assert!(deck.toggle_invert());
    assert!(!deck.toggle_invert());
    assert!(deck.toggle_print());
    assert!(deck.toggle_editor());

    let view = deck.view().expect("view");
    let view: ViewMirror = serde_wasm_bindgen::from_value(view).expect("deserialize");
    assert!(!view.inverted);
    assert!(view.printing);
    assert!(view.editing);
}

#[wasm_bindgen_test]
fn invert_config_starts_inverted() {
    let deck = deck(Config {
        markdown: Some("a"),
        invert: Some(true),
        ..Config::default()
    });
    let view: ViewMirror =
        serde_wasm_bindgen::from_value(deck.view().expect("view")).expect("deserialize");
    assert!(view.inverted);
}

#[wasm_bindgen_test]
fn paginate_function_splits_without_a_deck() {
    let pages = paginate("a\n---\nb\n----------\nc").expect("paginate");
    let pages: Vec<String> = serde_wasm_bindgen::from_value(pages).expect("deserialize");
    assert_eq!(pages, vec!["a", "b", "c"]);
}

#[wasm_bindgen_test]
fn render_slide_function_uses_default_options() {
    let html = render_slide("**hi**", JsValue::UNDEFINED).expect("render");
    assert_eq!(html, "<p><strong>hi</strong></p>");
}
