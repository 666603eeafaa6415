//! Indent stripping for Markdown embedded in host pages.

/// Strips the longest common leading-whitespace prefix from every line.
///
/// Markdown inlined in a `<script type="text/markdown">` tag arrives
/// indented to match the surrounding HTML; stripping the shared prefix
/// restores the author's intended indentation. Blank lines neither
/// contribute to the prefix nor get altered beyond it. Tabs and spaces only
/// match themselves, so mixed indentation shortens the shared prefix instead
/// of guessing a width.
pub fn strip_common_indent(text: &str) -> String {
    let prefix = common_indent(text);
    if prefix.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.strip_prefix(prefix).unwrap_or(line));
    }
    out
}

/// Longest whitespace prefix shared by all non-blank lines.
fn common_indent(text: &str) -> &str {
    let mut prefix: Option<&str> = None;
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let indent_len = line.len() - line.trim_start_matches([' ', '\t']).len();
        let indent = &line[..indent_len];
        prefix = Some(match prefix {
            None => indent,
            Some(shared) => shared_prefix(shared, indent),
        });
        if prefix == Some("") {
            break;
        }
    }
    prefix.unwrap_or("")
}

fn shared_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(left, right)| left == right)
        .count();
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_uniform_indent() {
        let text = "    # Title\n    body\n    more";
        assert_eq!(strip_common_indent(text), "# Title\nbody\nmore");
    }

    #[test]
    fn keeps_relative_indentation() {
        let text = "  - item\n    - nested";
        assert_eq!(strip_common_indent(text), "- item\n  - nested");
    }

    #[test]
    fn blank_lines_do_not_shrink_the_prefix() {
        let text = "    a\n\n    b";
        assert_eq!(strip_common_indent(text), "a\n\nb");
    }

    #[test]
    fn shallower_later_line_bounds_the_prefix() {
        let text = "        deep\n    shallow";
        assert_eq!(strip_common_indent(text), "    deep\nshallow");
    }

    #[test]
    fn mixed_tabs_and_spaces_share_no_prefix() {
        let text = "\tfirst\n  second";
        assert_eq!(strip_common_indent(text), text);
    }

    #[test]
    fn unindented_text_is_unchanged() {
        let text = "# Title\nbody";
        assert_eq!(strip_common_indent(text), text);
    }

    #[test]
    fn typical_embedded_script_markdown() {
        let text = "\n      # Deck\n\n      ---\n\n      ## Two\n    ";
        assert_eq!(strip_common_indent(text), "\n# Deck\n\n---\n\n## Two\n    ");
    }
}
