//! Programmatic construction of domains without going through text.

use super::ast::{Comparator, Condition, Expression, Node, Operator, Value};

/// Builds an [`Expression`] by chaining calls.
///
/// ```
/// use searchdomain::domain::{Comparator, DomainBuilder};
///
/// let domain = DomainBuilder::new()
///     .term("name", Comparator::Eq, "John")
///     .or(
///         ("is_company", Comparator::Eq, true),
///         ("customer", Comparator::Eq, true),
///     )
///     .build();
/// assert_eq!(
///     domain.to_string(),
///     "[('name', '=', 'John'), '|', ('is_company', '=', True), ('customer', '=', True)]"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomainBuilder {
    expression: Expression,
}

impl DomainBuilder {
    pub fn new() -> Self {
        DomainBuilder::default()
    }

    /// Append a single condition.
    pub fn term(
        self,
        field: impl Into<String>,
        comparator: Comparator,
        value: impl Into<Value>,
    ) -> Self {
        self.add(Condition::new(field, comparator, value))
    }

    pub fn add(mut self, condition: Condition) -> Self {
        self.expression.push(Node::Condition(condition));
        self
    }

    /// Append `& lhs rhs`.
    pub fn and(self, lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Self {
        self.combine(Operator::And, [lhs.into(), rhs.into()])
    }

    /// Append `| lhs rhs`.
    pub fn or(self, lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Self {
        self.combine(Operator::Or, [lhs.into(), rhs.into()])
    }

    /// Append `! operand`.
    pub fn not(self, operand: impl Into<Expression>) -> Self {
        self.combine(Operator::Not, [operand.into()])
    }

    /// Append an already built expression as is.
    pub fn extend(mut self, expression: impl Into<Expression>) -> Self {
        self.expression.append(expression.into());
        self
    }

    pub fn build(self) -> Expression {
        self.expression
    }

    fn combine<const N: usize>(mut self, op: Operator, operands: [Expression; N]) -> Self {
        self.expression.push(Node::Operator(op));
        for operand in operands {
            self.expression.append(operand);
        }
        self
    }
}

impl From<DomainBuilder> for Expression {
    fn from(builder: DomainBuilder) -> Self {
        builder.build()
    }
}

impl<F, V> From<(F, Comparator, V)> for Expression
where
    F: Into<String>,
    V: Into<Value>,
{
    fn from((field, comparator, value): (F, Comparator, V)) -> Self {
        Condition::new(field, comparator, value).into()
    }
}
