//! Best-effort literal decoding for argument values.
//!
//! [`decode_literal`] is a total function: it accepts only self-contained
//! literal syntax (numbers, booleans, `None`, quoted strings, bracketed
//! collections) and degrades to [`ParamValue::Raw`] for everything else.
//! It never evaluates expressions, calls functions, or resolves
//! identifiers from the scanned text.

use crate::types::ParamValue;

/// Decode one trimmed argument-value fragment into a typed value.
///
/// Failure is absorbed: any fragment the literal grammar rejects comes back
/// as the trimmed text verbatim.
pub fn decode_literal(raw: &str) -> ParamValue {
    let trimmed = raw.trim();
    parse_literal(trimmed).unwrap_or_else(|| ParamValue::Raw(trimmed.to_string()))
}

fn parse_literal(s: &str) -> Option<ParamValue> {
    if s.is_empty() {
        return None;
    }

    match s {
        "True" => return Some(ParamValue::Bool(true)),
        "False" => return Some(ParamValue::Bool(false)),
        "None" => return Some(ParamValue::None),
        _ => {}
    }

    if let Ok(i) = s.parse::<i64>() {
        return Some(ParamValue::Int(i));
    }

    // Guard the float parse so identifiers like "nan" or "inf" stay raw,
    // matching a literal-only grammar.
    if looks_numeric(s)
        && let Ok(f) = s.parse::<f64>()
    {
        return Some(ParamValue::Float(f));
    }

    if let Some(inner) = strip_quotes(s) {
        return Some(ParamValue::Str(inner.to_string()));
    }

    parse_collection(s)
}

fn looks_numeric(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

/// Strip one pair of matching outer quotes. Escape sequences inside are
/// left untouched; this is lexical recovery, not string evaluation.
fn strip_quotes(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    if s.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[s.len() - 1] == bytes[0]
    {
        return Some(&s[1..s.len() - 1]);
    }
    None
}

/// Parse a bracketed `[...]` or `(...)` collection, decoding elements
/// recursively. A parenthesized single element without a trailing comma is
/// grouping, not a one-element collection.
fn parse_collection(s: &str) -> Option<ParamValue> {
    let bytes = s.as_bytes();
    if s.len() < 2 {
        return None;
    }
    let (open, close) = match bytes[0] {
        b'[' => (b'[', b']'),
        b'(' => (b'(', b')'),
        _ => return None,
    };
    if bytes[s.len() - 1] != close {
        return None;
    }

    let inner = s[1..s.len() - 1].trim();
    if inner.is_empty() {
        return Some(ParamValue::List(Vec::new()));
    }

    let fragments = split_top_level(inner)?;
    let trailing_comma = inner.ends_with(',');

    let mut items = Vec::with_capacity(fragments.len());
    for fragment in &fragments {
        items.push(parse_literal(fragment.trim())?);
    }

    // `(5)` is the value 5, not a collection of one.
    if open == b'(' && items.len() == 1 && !trailing_comma {
        return items.pop();
    }

    Some(ParamValue::List(items))
}

/// Split on commas at bracket depth zero. Returns `None` when the brackets
/// inside do not balance, which sends the whole fragment to the raw
/// fallback.
fn split_top_level(inner: &str) -> Option<Vec<&str>> {
    let mut fragments = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, ch) in inner.char_indices() {
        match ch {
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            ',' if depth == 0 => {
                fragments.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }

    // A trailing comma leaves an empty final fragment; drop it.
    let tail = &inner[start..];
    if !tail.trim().is_empty() {
        fragments.push(tail);
    }

    Some(fragments)
}
