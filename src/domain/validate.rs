//! Arity validator for prefix-notation domains.

use super::ast::{Expression, Node, Operator};
use super::error::DomainError;

/// Confirm that every operator in `expression` has enough operands and
/// hand the expression back unchanged.
pub fn validate(expression: Expression) -> Result<Expression, DomainError> {
    check_arity(&expression)?;
    Ok(expression)
}

/// Check operator arity over a flat prefix sequence.
///
/// An operand is a condition or a complete operator chain, so `!` consumes
/// one sub-expression and `&`/`|` consume two. Conditions left over after
/// every operator is satisfied are implicitly AND-ed and are not an error.
/// When operands run out, the innermost unsatisfied operator is reported.
pub fn check_arity(nodes: &[Node]) -> Result<(), DomainError> {
    // (position, operator, operands still owed)
    let mut pending: Vec<(usize, Operator, usize)> = Vec::new();

    for (position, node) in nodes.iter().enumerate() {
        match node {
            Node::Operator(op) => pending.push((position, *op, op.arity())),
            Node::Condition(_) => {
                // A finished operand may complete a whole chain of operators.
                while let Some((_, _, owed)) = pending.last_mut() {
                    *owed -= 1;
                    if *owed > 0 {
                        break;
                    }
                    pending.pop();
                }
            }
        }
    }

    match pending.last() {
        None => Ok(()),
        Some(&(position, Operator::Not, _)) => Err(DomainError::NotEnoughNotTerms { position }),
        Some(&(position, Operator::And | Operator::Or, _)) => {
            Err(DomainError::NotEnoughAndOrTerms { position })
        }
    }
}
