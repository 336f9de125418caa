use rstest::rstest;
use searchdomain::domain::{
    Comparator, Condition, DomainBuilder, DomainError, Expression, Node, Operator, Value, parse,
    validate,
};

fn cond(field: &str, comparator: Comparator, value: impl Into<Value>) -> Node {
    Node::Condition(Condition::new(field, comparator, value))
}

#[rstest]
#[case("")]
#[case("[]")]
#[case("  [ ] ")]
fn empty_domains_match_everything(#[case] domain: &str) {
    assert_eq!(parse(domain), Ok(Expression::new()));
}

#[rstest]
#[case(
    "[('name','=','My Name')]",
    vec![cond("name", Comparator::Eq, "My Name")]
)]
#[case(
    "[('name','ilike','My Name')]",
    vec![cond("name", Comparator::Ilike, "My Name")]
)]
#[case(
    "[('a','=','b'),('c','in',['d'])]",
    vec![
        cond("a", Comparator::Eq, "b"),
        cond("c", Comparator::In, vec!["d"]),
    ]
)]
#[case(
    "[('name','=','My Name'),('amount','=',123.45)]",
    vec![
        cond("name", Comparator::Eq, "My Name"),
        cond("amount", Comparator::Eq, 123.45),
    ]
)]
#[case(
    "[('name', '=', 'John'), '|', ('is_company', '=', True), ('customer', '=', True)]",
    vec![
        cond("name", Comparator::Eq, "John"),
        Node::Operator(Operator::Or),
        cond("is_company", Comparator::Eq, true),
        cond("customer", Comparator::Eq, true),
    ]
)]
#[case(
    "[('name', 'like', 'John'),('ref', 'not like', 12345),('value','=',123.45),'&', ('is_company', '=', True),('customer','=',True)]",
    vec![
        cond("name", Comparator::Like, "John"),
        cond("ref", Comparator::NotLike, 12345),
        cond("value", Comparator::Eq, 123.45),
        Node::Operator(Operator::And),
        cond("is_company", Comparator::Eq, true),
        cond("customer", Comparator::Eq, true),
    ]
)]
#[case(
    "[('name', '=', 'ABC'), '!', ('phone','ilike','7620')]",
    vec![
        cond("name", Comparator::Eq, "ABC"),
        Node::Operator(Operator::Not),
        cond("phone", Comparator::Ilike, "7620"),
    ]
)]
#[case(
    "[('birthday.month_number', 'in', [10,11,12])]",
    vec![cond("birthday.month_number", Comparator::In, vec![10, 11, 12])]
)]
#[case(
    "[('birthday.month', 'in', ['April','May','June'])]",
    vec![cond("birthday.month", Comparator::In, vec!["April", "May", "June"])]
)]
#[case(
    "[('name','=',None),('active','=',false)]",
    vec![
        cond("name", Comparator::Eq, Value::Null),
        cond("active", Comparator::Eq, false),
    ]
)]
#[case(
    "['|','&',('parent_id','=',False),('id','=',partner_id), '&',('parent_id','=',partner_id),('type','=','invoice')]",
    vec![
        Node::Operator(Operator::Or),
        Node::Operator(Operator::And),
        cond("parent_id", Comparator::Eq, false),
        cond("id", Comparator::Eq, "partner_id"),
        Node::Operator(Operator::And),
        cond("parent_id", Comparator::Eq, "partner_id"),
        cond("type", Comparator::Eq, "invoice"),
    ]
)]
fn parses_valid_domains(#[case] domain: &str, #[case] expected: Vec<Node>) {
    assert_eq!(parse(domain), Ok(Expression::from(expected)));
}

#[test]
fn parses_sub_domains() {
    let expr = parse(
        "[('invoice_status', '=', 'to invoice'), ('order_line', 'any', [ ('product_id.qty_available', '<=', 0) , ('name','ilike','stud')])]",
    )
    .unwrap();

    assert_eq!(
        expr.into_nodes(),
        vec![
            cond("invoice_status", Comparator::Eq, "to invoice"),
            cond(
                "order_line",
                Comparator::Any,
                Value::List(vec![
                    Condition::new("product_id.qty_available", Comparator::Le, 0).into(),
                    Condition::new("name", Comparator::Ilike, "stud").into(),
                ])
            ),
        ]
    );
}

#[rstest]
#[case("[('name','lik','My Name')]", DomainError::InvalidComparator("lik".into()))]
#[case(
    "[('name', '=', 'ABC'), '|', ('phone','ilike','7620')]",
    DomainError::NotEnoughAndOrTerms { position: 1 }
)]
#[case(
    "['!', '!', ('a','=',1), '&', '!', ('b','=',2)]",
    DomainError::NotEnoughAndOrTerms { position: 3 }
)]
#[case("[('name', '=', 'ABC'), '!']", DomainError::NotEnoughNotTerms { position: 1 })]
#[case("['!']", DomainError::NotEnoughNotTerms { position: 0 })]
#[case("['!', '!']", DomainError::NotEnoughNotTerms { position: 1 })]
#[case("['&', ('a','=',1), '!']", DomainError::NotEnoughNotTerms { position: 2 })]
#[case(
    "[('name', '=', 'ABC'), '|', ('phone','ilike','7620'),'|']",
    DomainError::NotEnoughAndOrTerms { position: 3 }
)]
fn rejects_invalid_domains(#[case] domain: &str, #[case] expected: DomainError) {
    assert_eq!(parse(domain), Err(expected));
}

#[rstest]
#[case("('name','=','x')")]
#[case("[(]")]
#[case("[('a','=','b'")]
fn rejects_malformed_syntax(#[case] domain: &str) {
    assert!(matches!(parse(domain), Err(DomainError::Syntax(_))));
}

#[rstest]
#[case("[()]")]
#[case("[('name')]")]
#[case("[('name','=')]")]
#[case("[('name','=','')]")]
#[case("['!',('name','=','')]")]
fn rejects_incomplete_terms(#[case] domain: &str) {
    assert!(matches!(parse(domain), Err(DomainError::InvalidTermValues(_))));
}

#[test]
fn builder_output_passes_validation() {
    let expr = DomainBuilder::new()
        .term("name", Comparator::Eq, "ABC")
        .or(
            ("phone", Comparator::Ilike, "7620"),
            ("mobile", Comparator::Ilike, "7620"),
        )
        .build();

    let validated = validate(expr.clone()).unwrap();
    assert_eq!(validated, expr);
    assert_eq!(validate(validated.clone()).unwrap(), validated);
    assert_eq!(
        parse("[('name', '=', 'ABC'), '|', ('phone','ilike','7620'), ('mobile', 'ilike', '7620')]"),
        Ok(expr)
    );
}
