use fluent_typegen_inference::{
    ArgumentShape, CodeGenerator, EntryArguments, InferenceEngine, InferenceOptions, InferredType,
    LiteralKey, TypeScriptGenerator,
};
use fluent_typegen_parser::parse;

fn keys(ty: &InferredType) -> Vec<&str> {
    ty.keys().map(LiteralKey::as_str).collect()
}

#[test]
fn test_apples_select_on_count() {
    let source = r#"
apples = I have { $count ->
    [one] one apple
   *[other] { $count } apples
}
"#;

    let resource = parse(source).unwrap();
    let index = InferenceEngine::default().infer_resource(&resource).unwrap();

    assert_eq!(index.len(), 1);
    let apples = index.get("apples").and_then(EntryArguments::shape).unwrap();
    assert_eq!(apples.len(), 1);
    assert_eq!(keys(&apples["count"]), vec!["one", "other"]);
}

#[test]
fn test_hello_plain_reference() {
    let resource = parse("hello = Hello, { $name }!\n").unwrap();
    let index = InferenceEngine::default().infer_resource(&resource).unwrap();

    let hello = index.get("hello").and_then(EntryArguments::shape).unwrap();
    assert_eq!(hello["name"], InferredType::Opaque);
}

#[test]
fn test_no_arguments_when_empty_shapes_are_omitted() {
    let resource = parse("demo = Look ma, no arguments!\n").unwrap();
    let index = InferenceEngine::new(InferenceOptions::compact())
        .infer_resource(&resource)
        .unwrap();

    assert_eq!(index.argument_ids().count(), 0);
    assert_eq!(index.no_argument_ids().collect::<Vec<_>>(), vec!["demo"]);
}

#[test]
fn test_empty_shape_differs_from_absent_value() {
    let source = r#"
demo = Look ma, no arguments!
menu =
    .label = Menu
"#;

    let resource = parse(source).unwrap();
    let index = InferenceEngine::default().infer_resource(&resource).unwrap();

    assert_eq!(
        index.get("demo"),
        Some(&EntryArguments::Shape(ArgumentShape::new()))
    );
    assert_eq!(index.get("menu"), None);
    assert!(index.contains("menu.label"));
}

#[test]
fn test_render_full_resource() {
    let source = r#"
# Greetings
hello = Hello, { $name }!
    .title = { $gender ->
        [male] Mr. { $name }
        [female] Ms. { $name }
       *[other] { $name }
    }
-brand = Fluent
about = About { -brand }
"#;

    let resource = parse(source).unwrap();
    let index = InferenceEngine::default().infer_resource(&resource).unwrap();
    let ts_gen = TypeScriptGenerator::new();

    let rendered: Vec<(String, String)> = index
        .argument_ids()
        .map(|(id, shape)| (id.to_string(), ts_gen.generate_shape(shape)))
        .collect();

    assert_eq!(
        rendered,
        vec![
            (
                "hello".to_string(),
                "{ readonly name: FluentVariable }".to_string()
            ),
            (
                "hello.title".to_string(),
                "{ readonly gender: \"male\" | \"female\" | \"other\"; readonly name: FluentVariable }"
                    .to_string()
            ),
            ("about".to_string(), "Record<string, never>".to_string()),
        ]
    );
}

#[test]
fn test_index_as_json() {
    let source = r#"
unread = { $count ->
    [0] No messages
   *[other] { $count } messages
} for { $user }
"#;

    let resource = parse(source).unwrap();
    let index = InferenceEngine::default().infer_resource(&resource).unwrap();
    let json = serde_json::to_value(&index).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "unread": {
                "count": { "literalUnion": ["0", "other"] },
                "user": "opaque"
            }
        })
    );
}
