//! Parser for ORM search domains written as Python literals.
//!
//! Syntax:
//!   []                              - empty domain, matches everything
//!   [(field, comparator, value)]    - one condition
//!   [cond1, cond2]                  - implicit AND
//!   ['&', cond1, cond2]             - AND (prefix notation)
//!   ['|', cond1, cond2]             - OR
//!   ['!', cond]                     - NOT
//!   ['|', '&', c1, c2, c3]          - operands may be operator chains
//!
//! Values: 'text', "text", 42, 4.2, True, False, None (lowercase accepted),
//! lists `[1, 2]`, and sub-domains `[('qty', '<=', 0), ...]` for `any`.

mod ast;
mod builder;
mod condition;
mod error;
mod lexer;
mod literal;
mod tokenizer;
mod validate;

pub use ast::*;
pub use builder::DomainBuilder;
pub use error::DomainError;
pub use literal::scan;
pub use validate::{check_arity, validate};

use crate::config::ParserConfig;

/// Parse a domain string with the default configuration.
pub fn parse(text: &str) -> Result<Expression, DomainError> {
    parse_with(text, &ParserConfig::default())
}

/// Parse a domain string: tokenize, then check operator arity.
pub fn parse_with(text: &str, config: &ParserConfig) -> Result<Expression, DomainError> {
    let expression = tokenizer::tokenize(text, config, 0)?;
    let expression = validate(expression)?;
    tracing::debug!("Parsed domain into {} nodes", expression.len());
    Ok(expression)
}
