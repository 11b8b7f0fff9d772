//! Token parsing for the sparse matrix text format
//!
//! Whitespace is insignificant everywhere in the format, so every helper
//! here skips it instead of requiring the caller to strip a copy of the line.

/// Parse a signed integer token, ignoring any whitespace inside it
///
/// Accepts an optional leading `+` or `-` followed by one or more ASCII
/// digits. Returns `None` for anything else, including values that do not
/// fit in an `i64`.
pub fn parse_integer(token: &str) -> Option<i64> {
    let mut chars = token.chars().filter(|c| !c.is_whitespace()).peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut result: i64 = 0;
    let mut digits = 0usize;

    for c in chars {
        let digit = i64::from(c.to_digit(10)?);

        // Accumulate on the negative side so i64::MIN stays representable
        result = result.checked_mul(10)?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
        digits += 1;
    }

    if digits == 0 {
        return None;
    }

    Some(result)
}

/// Strip `prefix` from the start of `line`, skipping whitespace on both
///
/// Returns the remainder of `line` after the last matched prefix character.
pub fn strip_prefix_ignoring_whitespace<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut expected = prefix.chars().filter(|c| !c.is_whitespace()).peekable();
    let mut rest_start = 0;

    for (index, c) in line.char_indices() {
        if expected.peek().is_none() {
            break;
        }
        if c.is_whitespace() {
            continue;
        }
        if expected.next() != Some(c) {
            return None;
        }
        rest_start = index + c.len_utf8();
    }

    if expected.peek().is_some() {
        return None;
    }

    Some(&line[rest_start..])
}

/// Whether a line carries no content once whitespace is removed
pub fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}
