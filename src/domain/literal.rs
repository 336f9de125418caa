//! Literal scanner: turns the raw text of a value into a typed [`Value`].

use super::ast::{Operator, Value};
use super::condition::read_condition;
use super::error::DomainError;
use super::lexer::{complete, enclosed, float, integer, quoted, split_top_level};
use super::tokenizer::{descend, tokenize};
use super::validate::validate;
use crate::config::ParserConfig;

/// Scan a literal with the default configuration.
///
/// Unrecognized literals fall back to [`Value::String`]; the only failures
/// come from a sub-domain nested inside a list.
pub fn scan(text: &str) -> Result<Value, DomainError> {
    scan_value(text, &ParserConfig::default(), 0)
}

/// Scan `text` found at bracket nesting `depth`.
pub(crate) fn scan_value(
    text: &str,
    config: &ParserConfig,
    depth: usize,
) -> Result<Value, DomainError> {
    let text = text.trim();

    // Order matters: quoted digits stay strings, `1.5` is not an integer.
    match text {
        "True" | "true" => return Ok(Value::Boolean(true)),
        "False" | "false" => return Ok(Value::Boolean(false)),
        "None" | "none" => return Ok(Value::Null),
        _ => {}
    }
    if let Some(s) = complete(text, quoted) {
        return Ok(Value::String(s.to_string()));
    }
    if let Some(n) = complete(text, integer) {
        return Ok(Value::Integer(n));
    }
    if let Some(x) = complete(text, float) {
        return Ok(Value::Float(x));
    }
    if let Some(inner) = enclosed(text, '[', ']') {
        return scan_list(text, inner, config, depth);
    }

    Ok(Value::String(text.to_string()))
}

fn scan_list(
    text: &str,
    inner: &str,
    config: &ParserConfig,
    depth: usize,
) -> Result<Value, DomainError> {
    let elements = split_top_level(inner, usize::MAX)?;

    // Tuples mixed only with quoted operators form a sub-domain.
    if elements.iter().any(|e| is_tuple(e))
        && elements
            .iter()
            .all(|e| e.trim().is_empty() || is_tuple(e) || is_operator(e))
    {
        let sub_domain = validate(tokenize(text, config, depth)?)?;
        return Ok(Value::List(sub_domain.into_iter().map(Value::from).collect()));
    }

    let depth = descend(depth, config)?;
    let last = elements.len() - 1;
    let mut values = Vec::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        if element.trim().is_empty() {
            // `[]` and a trailing comma
            if i == last {
                continue;
            }
            return Err(DomainError::syntax(format!("empty element in list `{text}`")));
        }
        let value = match enclosed(element.trim(), '(', ')') {
            Some(inner) => read_condition(inner, config, depth)?.into(),
            None => scan_value(element, config, depth)?,
        };
        values.push(value);
    }

    Ok(Value::List(values))
}

fn is_tuple(element: &str) -> bool {
    enclosed(element.trim(), '(', ')').is_some()
}

fn is_operator(element: &str) -> bool {
    complete(element.trim(), quoted)
        .and_then(|symbol| Operator::from_symbol(symbol.trim()))
        .is_some()
}
