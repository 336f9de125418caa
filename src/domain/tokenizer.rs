//! Sequence tokenizer: splits a bracketed domain into operator and
//! condition nodes.

use super::ast::{Expression, Node, Operator};
use super::condition::read_condition;
use super::error::DomainError;
use super::lexer::{complete, enclosed, quoted, split_top_level};
use crate::config::ParserConfig;

/// Enter one more level of bracket nesting.
pub(crate) fn descend(depth: usize, config: &ParserConfig) -> Result<usize, DomainError> {
    let next = depth + 1;
    if next > config.max_depth {
        return Err(DomainError::syntax(format!(
            "nesting exceeds the maximum depth of {}",
            config.max_depth
        )));
    }
    Ok(next)
}

/// Tokenize `domain` (including its enclosing brackets) found at `depth`.
///
/// Blank input and `[]` give the empty expression. Operator arity is left
/// to the validator.
pub(crate) fn tokenize(
    domain: &str,
    config: &ParserConfig,
    depth: usize,
) -> Result<Expression, DomainError> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Ok(Expression::new());
    }

    let depth = descend(depth, config)?;
    let Some(inner) = enclosed(domain, '[', ']') else {
        return Err(DomainError::syntax(format!(
            "domain must be enclosed in square brackets: `{domain}`"
        )));
    };

    let terms = split_top_level(inner, usize::MAX)?;
    let last = terms.len() - 1;
    let mut expression = Expression::new();
    for (i, term) in terms.iter().enumerate() {
        let term = term.trim();
        if term.is_empty() {
            // `[]`, `[ ]` and a trailing comma
            if i == last {
                continue;
            }
            return Err(DomainError::syntax(format!("empty term in `{domain}`")));
        }
        expression.push(read_node(term, config, depth)?);
    }

    Ok(expression)
}

/// Read one top-level term: a parenthesized tuple or a quoted operator.
fn read_node(term: &str, config: &ParserConfig, depth: usize) -> Result<Node, DomainError> {
    if let Some(inner) = enclosed(term, '(', ')') {
        return read_condition(inner, config, depth).map(Node::Condition);
    }

    if let Some(symbol) = complete(term, quoted) {
        return Operator::from_symbol(symbol.trim())
            .map(Node::Operator)
            .ok_or_else(|| DomainError::syntax(format!("unknown operator {term}")));
    }

    Err(DomainError::syntax(format!("unexpected term `{term}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::{Comparator, Condition, Value};

    fn tokens(domain: &str) -> Result<Expression, DomainError> {
        tokenize(domain, &ParserConfig::default(), 0)
    }

    #[test]
    fn test_empty_domains() {
        for domain in ["", "   ", "[]", "  [ ] ", "[\n]"] {
            assert_eq!(tokens(domain).unwrap(), Expression::new(), "{domain:?}");
        }
    }

    #[test]
    fn test_conditions_and_operators() {
        let expr = tokens("['|', ('a','=','b'), '!', ('c','in',['d'])]").unwrap();
        assert_eq!(
            expr.into_nodes(),
            vec![
                Node::Operator(Operator::Or),
                Node::Condition(Condition::new("a", Comparator::Eq, "b")),
                Node::Operator(Operator::Not),
                Node::Condition(Condition::new(
                    "c",
                    Comparator::In,
                    Value::List(vec!["d".into()])
                )),
            ]
        );
    }

    #[test]
    fn test_nested_tuple_is_not_a_top_level_term() {
        let expr = tokens("[('line', 'any', [('qty', '<=', 0), ('name', 'ilike', 'stud')])]")
            .unwrap();
        assert_eq!(expr.len(), 1);
        let Node::Condition(condition) = &expr[0] else {
            panic!("expected a condition, got {:?}", expr[0]);
        };
        assert_eq!(condition.field, "line");
        assert_eq!(
            condition.value.as_sub_domain().map(|sub| sub.len()),
            Some(2)
        );
    }

    #[test]
    fn test_parentheses_inside_strings() {
        let expr = tokens("[('a','=','b (test)'),('c','=','d)')]").unwrap();
        assert_eq!(expr.len(), 2);
        assert_eq!(
            expr[1],
            Node::Condition(Condition::new("c", Comparator::Eq, "d)"))
        );
    }

    #[test]
    fn test_trailing_operator_is_kept_for_the_validator() {
        let expr = tokens("[('name', '=', 'ABC'), '!']").unwrap();
        assert_eq!(expr.last(), Some(&Node::Operator(Operator::Not)));
        assert_eq!(tokens("['!', '!']").unwrap().len(), 2);
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(tokens("[('a','=',1),]").unwrap().len(), 1);
    }

    #[test]
    fn test_syntax_errors() {
        for domain in [
            "('name','=','x')",
            "[('name','=','x')",
            "[(]",
            "[)]",
            "[a][b]",
            "[,]",
            "[('a','=',1),,('b','=',2)]",
            "[('a','=',1) ('b','=',2)]",
            "[('a','=',1), 'x', ('b','=',2)]",
            "[('a','=',1), |, ('b','=',2)]",
            "[('a','=','open)]",
        ] {
            assert!(
                matches!(tokens(domain), Err(DomainError::Syntax(_))),
                "{domain:?} should be a syntax error"
            );
        }
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig { max_depth: 2 };
        assert!(tokenize("[('a','in',[1])]", &config, 0).is_ok());
        assert!(matches!(
            tokenize("[('a','in',[[1]])]", &config, 0),
            Err(DomainError::Syntax(_))
        ));
    }
}
