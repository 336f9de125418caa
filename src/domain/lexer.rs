//! Character-level helpers shared by the scanner, the condition reader and
//! the tokenizer.

use winnow::ascii::digit1;
use winnow::combinator::{alt, delimited};
use winnow::prelude::*;
use winnow::token::take_till;

use super::error::DomainError;

// Result type of the `&str` lexers below
pub(crate) type PResult<T> = Result<T, winnow::error::ErrMode<winnow::error::ContextError>>;

/// Lex a single- or double-quoted string, returning the text between quotes.
pub(crate) fn quoted<'s>(input: &mut &'s str) -> PResult<&'s str> {
    alt((
        delimited('\'', take_till(0.., '\''), '\''),
        delimited('"', take_till(0.., '"'), '"'),
    ))
    .parse_next(input)
}

/// Lex an unsigned decimal integer.
pub(crate) fn integer(input: &mut &str) -> PResult<i64> {
    digit1.try_map(|digits: &str| digits.parse::<i64>()).parse_next(input)
}

/// Lex an unsigned float written as `digits.digits`.
pub(crate) fn float(input: &mut &str) -> PResult<f64> {
    (digit1, '.', digit1)
        .take()
        .try_map(|text: &str| text.parse::<f64>())
        .parse_next(input)
}

/// Run `parser` over the whole of `text`; `None` unless it consumes everything.
pub(crate) fn complete<'s, O>(
    text: &'s str,
    mut parser: impl FnMut(&mut &'s str) -> PResult<O>,
) -> Option<O> {
    let mut input = text;
    let output = parser(&mut input).ok()?;
    input.is_empty().then_some(output)
}

/// Strip one layer of matching quotes, if present, and trim.
pub(crate) fn unquote(text: &str) -> &str {
    let text = text.trim();
    complete(text, quoted).map_or(text, str::trim)
}

/// Split `text` on commas that are outside quotes, parentheses and brackets.
///
/// At most `max_parts` parts are produced; the last one holds the rest of
/// the text. Unbalanced nesting or an unterminated quote is a syntax error.
pub(crate) fn split_top_level(text: &str, max_parts: usize) -> Result<Vec<&str>, DomainError> {
    let mut parts = Vec::new();
    let mut closers: Vec<char> = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => quote = Some(c),
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            ')' | ']' => {
                if closers.pop() != Some(c) {
                    return Err(DomainError::syntax(format!(
                        "unbalanced '{c}' at byte {i} in `{text}`"
                    )));
                }
            }
            ',' if closers.is_empty() && parts.len() + 1 < max_parts => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(q) = quote {
        return Err(DomainError::syntax(format!("unterminated {q} quote in `{text}`")));
    }
    if let Some(closer) = closers.last() {
        return Err(DomainError::syntax(format!("missing '{closer}' in `{text}`")));
    }

    parts.push(&text[start..]);
    Ok(parts)
}

/// Return the interior of `text` when it is exactly one `open ... close`
/// group, i.e. the opening character is matched by the final one.
pub(crate) fn enclosed(text: &str, open: char, close: char) -> Option<&str> {
    if !text.starts_with(open) || !text.ends_with(close) {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        if c == '\'' || c == '"' {
            quote = Some(c);
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                let end = i + c.len_utf8();
                return (end == text.len()).then(|| &text[open.len_utf8()..i]);
            }
        }
    }
    None
}
