//! Rendering functions for the slide renderer.

use super::context::{LinkDefinition, RenderContext, Scope};
use crate::highlight::normalize_language;
use markdown::mdast::{AlignKind, Node};
use std::collections::HashMap;

/// Collects `[identifier]: url` definitions from the whole tree before
/// rendering starts, so references resolve regardless of document order.
/// The first definition of an identifier wins.
pub(super) fn collect_definitions(node: &Node, map: &mut HashMap<String, LinkDefinition>) {
    if let Node::Definition(definition) = node {
        map.entry(definition.identifier.clone())
            .or_insert_with(|| LinkDefinition {
                url: definition.url.clone(),
                title: definition.title.clone(),
            });
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, map);
        }
    }
}

/// Recursively renders an AST node to HTML, updating the context state.
pub(super) fn render_node(node: &Node, ctx: &mut RenderContext) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                render_node(child, ctx);
            }
        }
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(paragraph) => render_paragraph(paragraph, ctx),
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::Strong(strong) => {
            ctx.push_raw("<strong>");
            for child in &strong.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</strong>");
        }
        Node::Emphasis(emphasis) => {
            ctx.push_raw("<em>");
            for child in &emphasis.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</em>");
        }
        Node::Delete(delete) => {
            ctx.push_raw("<del>");
            for child in &delete.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</del>");
        }
        Node::InlineCode(code) => {
            ctx.push_raw("<code>");
            ctx.push_text(&code.value);
            ctx.push_raw("</code>");
        }
        Node::Code(code) => render_code(code, ctx),
        Node::Link(link) => render_link(link, ctx),
        Node::Image(image) => render_image(image, ctx),
        Node::LinkReference(reference) => render_link_reference(reference, ctx),
        Node::ImageReference(reference) => render_image_reference(reference, ctx),
        // Consumed by the definition pre-pass; renders nothing itself.
        Node::Definition(_) => {}
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, ctx),
        Node::Table(table) => render_table(table, ctx),
        // Handled by render_table; never reached at the top level.
        Node::TableRow(_) | Node::TableCell(_) => {}
        Node::Blockquote(quote) => render_blockquote(quote, ctx),
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Break(_) => ctx.push_raw("<br />"),
        Node::Html(html) => render_html(html, ctx),
        Node::FootnoteReference(reference) => render_footnote_reference(reference, ctx),
        Node::FootnoteDefinition(definition) => render_footnote_definition(definition, ctx),
        _ => {
            log::warn!("unhandled markdown node: {:?}", node);
        }
    }
}

/// Renders a paragraph, dropping the `<p>` wrapper directly inside tight
/// list items.
fn render_paragraph(paragraph: &markdown::mdast::Paragraph, ctx: &mut RenderContext) {
    let unwrapped = ctx.in_tight_list_item();
    if !unwrapped {
        ctx.push_raw("<p>");
    }
    for child in &paragraph.children {
        render_node(child, ctx);
    }
    if !unwrapped {
        ctx.push_raw("</p>");
    }
}

/// Renders a heading. No `id` attribute: the URL fragment is reserved for
/// slide deep links.
fn render_heading(heading: &markdown::mdast::Heading, ctx: &mut RenderContext) {
    ctx.push_raw(&format!("<h{}>", heading.depth));
    for child in &heading.children {
        render_node(child, ctx);
    }
    ctx.push_raw(&format!("</h{}>", heading.depth));
}

/// Renders a fenced code block through the highlighting seam.
fn render_code(code: &markdown::mdast::Code, ctx: &mut RenderContext) {
    let language = normalize_language(code.lang.as_deref());
    ctx.push_raw("<pre><code class=\"language-");
    ctx.push_attr_value(&language);
    ctx.push_raw("\">");
    match ctx.highlight(&code.value, &language) {
        Some(highlighted) => ctx.push_raw(&highlighted),
        None => ctx.push_text(&code.value),
    }
    ctx.push_raw("</code></pre>");
}

fn render_link(link: &markdown::mdast::Link, ctx: &mut RenderContext) {
    push_anchor_open(&link.url, link.title.as_deref(), ctx);
    for child in &link.children {
        render_node(child, ctx);
    }
    ctx.push_raw("</a>");
}

fn render_image(image: &markdown::mdast::Image, ctx: &mut RenderContext) {
    push_img(&image.url, &image.alt, image.title.as_deref(), ctx);
}

/// Renders `[text][id]` against the collected definitions. markdown-rs only
/// emits reference nodes for resolved labels, so a miss renders children as
/// plain content.
fn render_link_reference(reference: &markdown::mdast::LinkReference, ctx: &mut RenderContext) {
    match ctx.definition(&reference.identifier).cloned() {
        Some(definition) => {
            push_anchor_open(&definition.url, definition.title.as_deref(), ctx);
            for child in &reference.children {
                render_node(child, ctx);
            }
            ctx.push_raw("</a>");
        }
        None => {
            for child in &reference.children {
                render_node(child, ctx);
            }
        }
    }
}

/// Renders `![alt][id]` against the collected definitions.
fn render_image_reference(reference: &markdown::mdast::ImageReference, ctx: &mut RenderContext) {
    match ctx.definition(&reference.identifier).cloned() {
        Some(definition) => {
            push_img(&definition.url, &reference.alt, definition.title.as_deref(), ctx);
        }
        None => ctx.push_text(&reference.alt),
    }
}

fn push_anchor_open(url: &str, title: Option<&str>, ctx: &mut RenderContext) {
    ctx.push_raw("<a href=\"");
    ctx.push_attr_value(url);
    ctx.push_raw("\"");
    if let Some(title) = title {
        ctx.push_raw(" title=\"");
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }
    ctx.push_raw(">");
}

fn push_img(url: &str, alt: &str, title: Option<&str>, ctx: &mut RenderContext) {
    ctx.push_raw("<img src=\"");
    ctx.push_attr_value(url);
    ctx.push_raw("\" alt=\"");
    ctx.push_attr_value(alt);
    ctx.push_raw("\"");
    if let Some(title) = title {
        ctx.push_raw(" title=\"");
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }
    if ctx.lazy_images_enabled() {
        ctx.push_raw(" loading=\"lazy\"");
    }
    ctx.push_raw(" />");
}

fn render_list(list: &markdown::mdast::List, ctx: &mut RenderContext) {
    let tag = if list.ordered { "ol" } else { "ul" };
    match list.start {
        Some(start) if list.ordered && start != 1 => {
            ctx.push_raw(&format!("<ol start=\"{start}\">"));
        }
        _ => ctx.push_raw(&format!("<{tag}>")),
    }
    ctx.enter(Scope::List { tight: !list.spread });
    for child in &list.children {
        render_node(child, ctx);
    }
    ctx.exit();
    ctx.push_raw(&format!("</{tag}>"));
}

/// Renders a list item; task items get a disabled checkbox.
fn render_list_item(item: &markdown::mdast::ListItem, ctx: &mut RenderContext) {
    match item.checked {
        Some(checked) => {
            ctx.push_raw("<li class=\"task-list-item\"><input type=\"checkbox\" disabled");
            if checked {
                ctx.push_raw(" checked");
            }
            ctx.push_raw(" /> ");
        }
        None => ctx.push_raw("<li>"),
    }
    for child in &item.children {
        render_node(child, ctx);
    }
    ctx.push_raw("</li>");
}

fn render_table(table: &markdown::mdast::Table, ctx: &mut RenderContext) {
    ctx.push_raw("<table><thead>");
    if let Some(Node::TableRow(header)) = table.children.first() {
        render_table_row(header, true, &table.align, ctx);
    }
    ctx.push_raw("</thead>");
    if table.children.len() > 1 {
        ctx.push_raw("<tbody>");
        for row in table.children.iter().skip(1) {
            if let Node::TableRow(row) = row {
                render_table_row(row, false, &table.align, ctx);
            }
        }
        ctx.push_raw("</tbody>");
    }
    ctx.push_raw("</table>");
}

fn render_table_row(
    row: &markdown::mdast::TableRow,
    is_header: bool,
    aligns: &[AlignKind],
    ctx: &mut RenderContext,
) {
    let tag = if is_header { "th" } else { "td" };
    ctx.push_raw("<tr>");
    for (column, cell) in row.children.iter().enumerate() {
        if let Node::TableCell(cell) = cell {
            let align = match aligns.get(column) {
                Some(AlignKind::Left) => " align=\"left\"",
                Some(AlignKind::Right) => " align=\"right\"",
                Some(AlignKind::Center) => " align=\"center\"",
                _ => "",
            };
            ctx.push_raw(&format!("<{tag}{align}>"));
            for child in &cell.children {
                render_node(child, ctx);
            }
            ctx.push_raw(&format!("</{tag}>"));
        }
    }
    ctx.push_raw("</tr>");
}

fn render_blockquote(quote: &markdown::mdast::Blockquote, ctx: &mut RenderContext) {
    ctx.push_raw("<blockquote>");
    ctx.enter(Scope::Blockquote);
    for child in &quote.children {
        render_node(child, ctx);
    }
    ctx.exit();
    ctx.push_raw("</blockquote>");
}

fn render_html(html: &markdown::mdast::Html, ctx: &mut RenderContext) {
    if ctx.raw_html_allowed() {
        ctx.push_raw(&html.value);
    } else {
        log::debug!("escaping raw HTML in slide: {}", html.value);
        ctx.push_text(&html.value);
    }
}

/// Renders a footnote reference as a plain ordinal superscript. No anchor:
/// the URL fragment is reserved for slide deep links.
fn render_footnote_reference(
    reference: &markdown::mdast::FootnoteReference,
    ctx: &mut RenderContext,
) {
    let ordinal = ctx.footnote_ordinal(&reference.identifier);
    ctx.push_raw(&format!("<sup class=\"footnote-ref\">{ordinal}</sup>"));
}

/// Collects a footnote definition for the end-of-slide list.
fn render_footnote_definition(
    definition: &markdown::mdast::FootnoteDefinition,
    ctx: &mut RenderContext,
) {
    let inner = ctx.capture(|ctx| {
        for child in &definition.children {
            render_node(child, ctx);
        }
    });
    ctx.push_footnote(definition.identifier.clone(), inner);
}
