//! URL fragment parsing and formatting for deep-link sync.

/// Parses a location-hash fragment into a raw slide index.
///
/// Accepts an optional leading `#`, ignores surrounding whitespace, and
/// reads a leading digit run with an optional `+` or `-` sign, so `"12abc"`
/// parses as `12` the way `parseInt` would. Anything non-numeric yields `0`.
/// The result is a raw target for the navigation clamp; negative and
/// out-of-range values pass through unchanged.
pub fn parse_fragment(fragment: &str) -> isize {
    let text = fragment.trim();
    let text = text.strip_prefix('#').unwrap_or(text).trim();
    let (negative, digits_and_rest) = if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    };

    let digit_len = digits_and_rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let digits = &digits_and_rest[..digit_len];
    if digits.is_empty() {
        return 0;
    }

    match digits.parse::<isize>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        // A digit run too long for isize saturates toward the signed extreme;
        // the clamp turns it into the first or last slide anyway.
        Err(_) if negative => isize::MIN,
        Err(_) => isize::MAX,
    }
}

/// Formats a slide index as a location-hash fragment (`#3`).
pub fn format_fragment(index: usize) -> String {
    format!("#{index}")
}
