use fluent_typegen_parser::ast::{Entry, Expression, PatternElement};
use fluent_typegen_parser::{format_errors, message_count, parse, parse_lenient};

#[test]
fn test_parse_realistic_resource() {
    let source = r#"
## Shopping cart

-brand = Shopfront

cart-title = Your { -brand } cart
cart-items = { $count ->
    [0] Your cart is empty
    [one] One item
   *[other] { $count } items
}
checkout =
    .label = Checkout
    .title = Pay { NUMBER($total, style: "currency") }
"#;

    let result = parse(source);
    if let Err(e) = &result {
        eprintln!("Parse error: {}", e);
    }

    let resource = result.unwrap();
    assert_eq!(message_count(&resource), 3);
}

#[test]
fn test_select_expression_survives_parse() {
    let source = "emails = { $unread ->\n    [one] One email\n   *[other] { $unread } emails\n}\n";
    let resource = parse(source).unwrap();

    let message = match &resource.body[0] {
        Entry::Message(message) => message,
        other => panic!("Expected a message, got {:?}", other),
    };
    assert_eq!(message.id.name, "emails");

    let pattern = message.value.as_ref().unwrap();
    assert!(matches!(
        &pattern.elements[0],
        PatternElement::Placeable {
            expression: Expression::Select { .. }
        }
    ));
}

#[test]
fn test_multiple_errors_are_collected() {
    let source = "one = { $a\ntwo = fine\nthree = { $b\n";
    let errors = parse(source).unwrap_err();

    assert!(errors.len() >= 2);
    assert!(errors.to_string().contains("more)"));
}

#[test]
fn test_lenient_parse_matches_strict_for_valid_input() {
    let source = "hello = Hello\nbye = Bye { $name }\n";

    let strict = parse(source).unwrap();
    let (lenient, errors) = parse_lenient(source);

    assert!(errors.is_empty());
    assert_eq!(strict, lenient);
}

#[test]
fn test_format_errors_includes_parser_message() {
    let source = "hello = { $name\n";
    let errors = parse(source).unwrap_err();
    let message = errors.iter().next().unwrap().message.clone();

    let output = format_errors(source, "app.ftl", &errors);
    assert!(output.contains(&message));
}
