//! Line-based fenced code tracking.
//!
//! Pagination must not treat a `---` line inside a fenced code block as a
//! slide boundary, so the paginator feeds every line through this tracker.

/// An open fenced code block observed during a line scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenFence {
    /// Fence marker character (` or ~).
    marker: char,
    /// Number of marker characters in the opening run.
    length: usize,
}

/// Tracks fenced code blocks across a line-by-line scan of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FenceTracker {
    open: Option<OpenFence>,
}

impl FenceTracker {
    /// Creates a tracker positioned outside any fence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next line and reports whether it belongs to fenced code.
    ///
    /// Fence marker lines themselves count as fenced content; a hyphen run
    /// can never double as a fence marker, so one yes/no per line is enough
    /// for the paginator.
    pub fn feed(&mut self, line: &str) -> bool {
        match self.open {
            None => {
                let (columns, offset) = leading_whitespace_columns(line);
                // CommonMark: 4+ columns of indentation make an indented
                // code block, not a fence opener.
                if columns <= 3
                    && let Some((marker, length)) = fence_run(&line[offset..])
                {
                    self.open = Some(OpenFence { marker, length });
                    return true;
                }
                false
            }
            Some(fence) => {
                if closes(fence, line) {
                    self.open = None;
                }
                true
            }
        }
    }

    /// Returns true while positioned inside an unterminated fence.
    pub fn in_fence(&self) -> bool {
        self.open.is_some()
    }
}

/// Returns (visual columns, byte offset) for a line's leading whitespace.
/// Visual columns expand tabs to 4-column boundaries per CommonMark.
fn leading_whitespace_columns(line: &str) -> (usize, usize) {
    let mut columns = 0;
    let mut offset = 0;
    for b in line.bytes() {
        match b {
            b' ' => {
                columns += 1;
                offset += 1;
            }
            b'\t' => {
                columns += 4 - (columns % 4);
                offset += 1;
            }
            _ => break,
        }
    }
    (columns, offset)
}

/// Detects an opening run of three or more ` or ~ characters.
fn fence_run(after_indent: &str) -> Option<(char, usize)> {
    let mut chars = after_indent.chars();
    let first = chars.next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let length = 1 + chars.take_while(|c| *c == first).count();
    (length >= 3).then_some((first, length))
}

/// A closer matches the open marker, runs at least as long as the opener,
/// carries no info string, and is indented at most 3 columns.
fn closes(fence: OpenFence, line: &str) -> bool {
    let (columns, offset) = leading_whitespace_columns(line);
    if columns > 3 {
        return false;
    }
    let rest = &line[offset..];
    let run = rest.chars().take_while(|c| *c == fence.marker).count();
    run >= fence.length && rest[run..].chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(tracker: &mut FenceTracker, lines: &[&str]) -> Vec<bool> {
        lines.iter().map(|line| tracker.feed(line)).collect()
    }

    #[test]
    fn backtick_fence_opens_and_closes() {
        let mut tracker = FenceTracker::new();
        let fenced = feed_all(&mut tracker, &["```js", "let x = 1;", "```", "after"]);
        assert_eq!(fenced, vec![true, true, true, false]);
        assert!(!tracker.in_fence());
    }

    #[test]
    fn tilde_fence_ignores_backtick_closer() {
        let mut tracker = FenceTracker::new();
        let fenced = feed_all(&mut tracker, &["~~~ts", "```", "~~~"]);
        assert_eq!(fenced, vec![true, true, true]);
        assert!(!tracker.in_fence());
    }

    #[test]
    fn two_markers_do_not_open() {
        let mut tracker = FenceTracker::new();
        assert!(!tracker.feed("``"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn four_column_indent_is_not_a_fence() {
        let mut tracker = FenceTracker::new();
        assert!(!tracker.feed("    ```js"));
        assert!(!tracker.feed("\t```js"));
        assert!(!tracker.in_fence());
    }

    #[test]
    fn three_column_indent_opens() {
        let mut tracker = FenceTracker::new();
        assert!(tracker.feed("   ```"));
        assert!(tracker.in_fence());
    }

    #[test]
    fn closer_must_reach_opening_length() {
        let mut tracker = FenceTracker::new();
        tracker.feed("````markdown");
        tracker.feed("```");
        assert!(tracker.in_fence(), "3-run must not close a 4-run fence");
        tracker.feed("`````");
        assert!(!tracker.in_fence(), "longer closer ends the fence");
    }

    #[test]
    fn closer_with_info_string_does_not_close() {
        let mut tracker = FenceTracker::new();
        tracker.feed("```");
        tracker.feed("```js");
        assert!(tracker.in_fence());
    }

    #[test]
    fn indented_closer_within_three_columns_closes() {
        let mut tracker = FenceTracker::new();
        tracker.feed("```");
        tracker.feed("code");
        tracker.feed("  ```");
        assert!(!tracker.in_fence());
    }

    #[test]
    fn deeply_indented_closer_stays_content() {
        let mut tracker = FenceTracker::new();
        tracker.feed("   ```");
        tracker.feed("      code");
        assert!(tracker.feed("      ```"));
        assert!(tracker.in_fence());
    }
}
