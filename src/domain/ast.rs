//! Typed representation of a parsed search domain.

use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use super::error::DomainError;

/// A literal on the value side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Quoted text (quotes stripped) or an unrecognized bare literal
    String(String),
    Integer(i64),
    Float(f64),
    /// `True` / `False`
    Boolean(bool),
    /// `None`
    Null,
    /// `[...]`, either plain values or a sub-domain
    List(Vec<Value>),
    /// Sub-domain member: a nested `(field, comparator, value)` tuple
    Condition(Box<Condition>),
    /// Sub-domain member: a logical operator
    Operator(Operator),
}

impl Value {
    /// Interpret a list of nested conditions and operators as a domain.
    ///
    /// Returns `None` for scalars, empty lists and lists of plain values.
    pub fn as_sub_domain(&self) -> Option<Expression> {
        let Value::List(items) = self else {
            return None;
        };
        if items.is_empty() {
            return None;
        }
        items
            .iter()
            .map(|item| match item {
                Value::Condition(condition) => Some(Node::Condition((**condition).clone())),
                Value::Operator(op) => Some(Node::Operator(*op)),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(Expression::from)
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Value::String(s) if s.trim().is_empty())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<Condition> for Value {
    fn from(condition: Condition) -> Self {
        Value::Condition(Box::new(condition))
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Operator(op) => Value::Operator(op),
            Node::Condition(condition) => condition.into(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write_quoted(f, s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::Null => write!(f, "None"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Condition(condition) => write!(f, "{condition}"),
            Value::Operator(op) => write!(f, "'{op}'"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
            Value::List(items) => serializer.collect_seq(items),
            Value::Condition(condition) => condition.serialize(serializer),
            Value::Operator(op) => op.serialize(serializer),
        }
    }
}

/// Plain decimal notation with at least one fractional digit, so the
/// output matches the `digits.digits` float literal.
///
/// Non-finite values print as `NaN`, `inf` and `-inf`, which are not float
/// literals and read back as strings.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if !x.is_finite() {
        return write!(f, "{x}");
    }
    let text = x.to_string();
    if text.contains('.') {
        f.write_str(&text)
    } else {
        write!(f, "{text}.0")
    }
}

/// The grammar has no escape sequences, so the text is wrapped in the quote
/// it lacks. Text holding both `'` and `"` has no faithful literal form; it
/// is written single-quoted and does not read back as the same string.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    if text.contains('\'') && !text.contains('"') {
        write!(f, "\"{text}\"")
    } else {
        write!(f, "'{text}'")
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Eq,          // =
    Ne,          // !=
    Gt,          // >
    Ge,          // >=
    Lt,          // <
    Le,          // <=
    EqOrUnset,   // =?
    Like,        // like
    NotLike,     // not like
    Ilike,       // ilike
    NotIlike,    // not ilike
    EqIlike,     // =ilike
    In,          // in
    NotIn,       // not in
    ChildOf,     // child_of
    ParentOf,    // parent_of
    Any,         // any
    NotAny,      // not any
}

impl Comparator {
    pub const ALL: [Comparator; 18] = [
        Comparator::Eq,
        Comparator::Ne,
        Comparator::Gt,
        Comparator::Ge,
        Comparator::Lt,
        Comparator::Le,
        Comparator::EqOrUnset,
        Comparator::Like,
        Comparator::NotLike,
        Comparator::Ilike,
        Comparator::NotIlike,
        Comparator::EqIlike,
        Comparator::In,
        Comparator::NotIn,
        Comparator::ChildOf,
        Comparator::ParentOf,
        Comparator::Any,
        Comparator::NotAny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::EqOrUnset => "=?",
            Comparator::Like => "like",
            Comparator::NotLike => "not like",
            Comparator::Ilike => "ilike",
            Comparator::NotIlike => "not ilike",
            Comparator::EqIlike => "=ilike",
            Comparator::In => "in",
            Comparator::NotIn => "not in",
            Comparator::ChildOf => "child_of",
            Comparator::ParentOf => "parent_of",
            Comparator::Any => "any",
            Comparator::NotAny => "not any",
        }
    }
}

impl FromStr for Comparator {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        Comparator::ALL
            .into_iter()
            .find(|comparator| comparator.as_str() == normalized)
            .ok_or_else(|| DomainError::InvalidComparator(text.to_string()))
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical operator written in prefix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Not, // !
    And, // &
    Or,  // |
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Not => "!",
            Operator::And => "&",
            Operator::Or => "|",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(Operator::Not),
            "&" => Some(Operator::And),
            "|" => Some(Operator::Or),
            _ => None,
        }
    }

    /// Number of operands the operator consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::And | Operator::Or => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// An atomic `(field, comparator, value)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub comparator: Comparator,
    pub value: Value,
}

impl Condition {
    pub fn new(field: impl Into<String>, comparator: Comparator, value: impl Into<Value>) -> Self {
        Condition {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_quoted(f, &self.field)?;
        write!(f, ", '{}', {})", self.comparator, self.value)
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.field)?;
        tuple.serialize_element(self.comparator.as_str())?;
        tuple.serialize_element(&self.value)?;
        tuple.end()
    }
}

/// One element of a domain.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Operator(Operator),
    Condition(Condition),
}

impl From<Operator> for Node {
    fn from(op: Operator) -> Self {
        Node::Operator(op)
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operator(op) => write!(f, "'{op}'"),
            Node::Condition(condition) => write!(f, "{condition}"),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Operator(op) => op.serialize(serializer),
            Node::Condition(condition) => condition.serialize(serializer),
        }
    }
}

/// A domain in prefix notation.
///
/// Operators precede their operands; bare conditions that follow a
/// complete operator chain are implicitly AND-ed. The empty expression
/// matches everything.
///
/// `Display` writes the Python-literal form, which parses back to the same
/// expression as long as every value has a literal in the grammar. Values
/// that do not (negative or non-finite numbers, strings containing both
/// quote characters) come from the builder or from unquoted raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression(Vec<Node>);

impl Expression {
    pub fn new() -> Self {
        Expression::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.0
    }

    /// Conditions in order of appearance, top level only.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.0.iter().filter_map(|node| match node {
            Node::Condition(condition) => Some(condition),
            Node::Operator(_) => None,
        })
    }

    pub(crate) fn push(&mut self, node: Node) {
        self.0.push(node);
    }

    pub(crate) fn append(&mut self, other: Expression) {
        self.0.extend(other.0);
    }
}

impl Deref for Expression {
    type Target = [Node];

    fn deref(&self) -> &[Node] {
        &self.0
    }
}

impl From<Vec<Node>> for Expression {
    fn from(nodes: Vec<Node>) -> Self {
        Expression(nodes)
    }
}

impl From<Condition> for Expression {
    fn from(condition: Condition) -> Self {
        Expression(vec![Node::Condition(condition)])
    }
}

impl FromIterator<Node> for Expression {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Expression(iter.into_iter().collect())
    }
}

impl IntoIterator for Expression {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Expression {
    type Err = DomainError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        super::parse(text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{node}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}
