//! Splitting a Markdown document into slide fragments.

use crate::fence::FenceTracker;

/// Returns true when `line` is a slide delimiter: three or more hyphens and
/// nothing else. Leading or trailing spaces disqualify a line; a trailing
/// carriage return is tolerated for CRLF documents.
pub fn is_slide_delimiter(line: &str) -> bool {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// Splits a Markdown document into an ordered sequence of slide fragments.
///
/// A fragment boundary is a delimiter line outside fenced code (a `---` line
/// inside ``` or ~~~ fences is content). Fragments are byte slices of the
/// document: text and interior line endings survive exactly as written, and
/// the last fragment keeps any trailing newline. The line terminators
/// adjoining a delimiter line belong to the boundary, not to the fragments
/// around it. Fragments blank after trimming are dropped, so consecutive
/// delimiters or delimiters at the edges of the document never produce empty
/// slides.
///
/// Pure and deterministic: no state is carried between calls.
///
/// # Examples
///
/// ```
/// use slidedown_core::paginate;
///
/// let pages = paginate("# One\n---\n# Two");
/// assert_eq!(pages, vec!["# One".to_string(), "# Two".to_string()]);
///
/// assert_eq!(paginate("no delimiter"), vec!["no delimiter".to_string()]);
/// assert!(paginate("  \n\n").is_empty());
/// ```
pub fn paginate(document: &str) -> Vec<String> {
    let mut pages = Vec::new();
    let mut tracker = FenceTracker::new();

    // The open fragment as byte offsets into `document`: where it starts,
    // and one past its last content byte (line terminator excluded).
    let mut start = 0;
    let mut end = 0;
    let mut cursor = 0;

    while let Some((line, next_cursor)) = next_line(document, cursor) {
        let content = line.strip_suffix('\r').unwrap_or(line);
        let fenced = tracker.feed(content);
        if !fenced && is_slide_delimiter(content) {
            flush(&mut pages, &document[start..end]);
            start = next_cursor;
            end = next_cursor;
        } else {
            end = cursor + content.len();
        }
        cursor = next_cursor;
    }
    // The last fragment runs to the end of the document, trailing
    // terminator included.
    flush(&mut pages, &document[start..]);

    pages
}

/// Records a fragment, keeping it only when non-blank.
fn flush(pages: &mut Vec<String>, fragment: &str) {
    if !fragment.trim().is_empty() {
        pages.push(fragment.to_string());
    }
}

/// Yields the line starting at `start` (newline excluded) and the offset of
/// the line after it.
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
