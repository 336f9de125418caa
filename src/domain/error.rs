//! Errors raised while parsing or validating a search domain.

use thiserror::Error;

/// Every way a domain string can be rejected.
///
/// Errors are terminal: a domain that fails to parse yields no partial
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed bracket or quote nesting, missing enclosing brackets,
    /// stray tokens, or an operator with nothing after it.
    #[error("invalid syntax: {0}")]
    Syntax(String),

    /// The comparator is not part of the supported vocabulary.
    #[error("invalid comparator `{0}`")]
    InvalidComparator(String),

    /// Empty field, comparator or value, or a tuple without three members.
    #[error("invalid term values: {0}")]
    InvalidTermValues(String),

    /// An `&` or `|` operator with fewer than two operands.
    #[error("not enough AND/OR terms for operator at position {position}")]
    NotEnoughAndOrTerms { position: usize },

    /// A `!` operator without an operand.
    #[error("not enough NOT terms for operator at position {position}")]
    NotEnoughNotTerms { position: usize },
}

impl DomainError {
    pub(crate) fn syntax(message: impl Into<String>) -> Self {
        DomainError::Syntax(message.into())
    }

    pub(crate) fn term_values(message: impl Into<String>) -> Self {
        DomainError::InvalidTermValues(message.into())
    }
}
