//! Condition reader: the interior of one `(field, comparator, value)` tuple.

use super::ast::{Comparator, Condition};
use super::error::DomainError;
use super::lexer::{split_top_level, unquote};
use super::literal::scan_value;
use crate::config::ParserConfig;

/// Read the text between a tuple's parentheses into a [`Condition`].
///
/// Only the first two top-level commas split; anything after the second
/// belongs to the value.
pub(crate) fn read_condition(
    inner: &str,
    config: &ParserConfig,
    depth: usize,
) -> Result<Condition, DomainError> {
    let parts = split_top_level(inner, 3)?;
    let [field, comparator, value] = parts.as_slice() else {
        return Err(DomainError::term_values(format!(
            "expected (field, comparator, value), got ({})",
            inner.trim()
        )));
    };

    let field = unquote(field);
    if field.is_empty() {
        return Err(DomainError::term_values(format!("empty field in ({})", inner.trim())));
    }
    let comparator = unquote(comparator);
    if comparator.is_empty() {
        return Err(DomainError::term_values(format!(
            "empty comparator in ({})",
            inner.trim()
        )));
    }
    let comparator: Comparator = comparator.parse()?;

    let value = scan_value(value, config, depth)?;
    if value.is_blank() {
        return Err(DomainError::term_values(format!("empty value for field `{field}`")));
    }

    tracing::trace!("Condition: {} {} {}", field, comparator, value);
    Ok(Condition {
        field: field.to_string(),
        comparator,
        value,
    })
}
