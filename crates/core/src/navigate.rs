//! Slide index movements and the bounds clamp.

use serde::Serialize;

/// A movement request against the slide list.
///
/// `Prev` always means one slide back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Advance one slide.
    Next,
    /// Back up one slide.
    Prev,
    /// Jump to the first slide.
    First,
    /// Jump to the last slide.
    Last,
    /// Jump to an absolute position; any integer is accepted and clamped.
    Goto(isize),
}

/// A committed index change, reported to interested collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationChange {
    /// Index before the movement.
    pub from: usize,
    /// Index after the movement.
    pub to: usize,
}

/// Clamps a raw target into `[0, page_count - 1]`, or to `0` for an empty
/// deck. Every movement resolution passes through here, including externally
/// supplied indices, which may be stale or malformed.
pub fn clamp_index(target: isize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    let last = (page_count - 1) as isize;
    target.clamp(0, last) as usize
}

/// Resolves a movement against the current index and page count.
///
/// Every request resolves to an in-range index, or `0` for an empty deck.
/// Out-of-range targets are clamped, never rejected.
pub fn resolve_movement(movement: Movement, current: usize, page_count: usize) -> usize {
    let target = match movement {
        Movement::Next => current as isize + 1,
        Movement::Prev => current as isize - 1,
        Movement::First => 0,
        Movement::Last => page_count as isize - 1,
        Movement::Goto(target) => target,
    };
    clamp_index(target, page_count)
}
