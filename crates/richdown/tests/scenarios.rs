use richdown::{MarkdownSerializer, SerializeError};

fn convert(json: &str) -> String {
    MarkdownSerializer::new().serialize_json(json).unwrap()
}

#[test]
fn test_full_document() {
    let json = r#"{"type": "doc", "content": [
        {"type": "heading", "attrs": {"level": 1}, "content": [{"type": "text", "text": "Notes"}]},
        {"type": "paragraph", "content": [
            {"type": "text", "text": "Some "},
            {"type": "text", "text": "bold", "marks": [{"type": "strong"}]},
            {"type": "text", "text": " and a "},
            {"type": "text", "text": "link", "marks": [{"type": "link", "attrs": {"href": "http://x", "title": null}}]},
            {"type": "text", "text": "."}
        ]},
        {"type": "bullet_list", "attrs": {"tight": true}, "content": [
            {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "one"}]}]},
            {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "two"}]}]}
        ]},
        {"type": "code_block", "attrs": {"params": "sh"}, "content": [{"type": "text", "text": "echo *"}]},
        {"type": "horizontal_rule"}
    ]}"#;

    let expected = "# Notes\n\n\
                    Some **bold** and a [link](http://x).\n\n\
                    * one\n\
                    * two\n\n\
                    ```sh\n\
                    echo *\n\
                    ```\n\n\
                    ---";
    assert_eq!(convert(json), expected);
}

#[test]
fn test_quote_with_list() {
    let json = r#"{"type": "doc", "content": [
        {"type": "blockquote", "content": [
            {"type": "paragraph", "content": [{"type": "text", "text": "intro"}]},
            {"type": "ordered_list", "attrs": {"order": 1, "tight": true}, "content": [
                {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "a"}]}]},
                {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "b"}]}]}
            ]}
        ]}
    ]}"#;
    assert_eq!(convert(json), "> intro\n>\n> 1. a\n> 2. b");
}

#[test]
fn test_nested_ordered_list_indent() {
    let json = r#"{"type": "doc", "content": [
        {"type": "ordered_list", "attrs": {"order": 9, "tight": true}, "content": [
            {"type": "list_item", "content": [
                {"type": "paragraph", "content": [{"type": "text", "text": "a"}]},
                {"type": "bullet_list", "content": [
                    {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "x"}]}]}
                ]}
            ]},
            {"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "b"}]}]}
        ]}
    ]}"#;
    assert_eq!(convert(json), " 9. a\n    * x\n10. b");
}

#[test]
fn test_separated_lists() {
    let item = r#"{"type": "list_item", "content": [{"type": "paragraph", "content": [{"type": "text", "text": "i"}]}]}"#;
    let json = format!(
        r#"{{"type": "doc", "content": [
            {{"type": "ordered_list", "attrs": {{"tight": true}}, "content": [{item}, {item}]}},
            {{"type": "ordered_list", "attrs": {{"tight": true}}, "content": [{item}]}}
        ]}}"#,
        item = item
    );
    assert_eq!(convert(&json), "1. i\n2. i\n\n\n1. i");
}

#[test]
fn test_indented_code_in_quote() {
    let json = r#"{"type": "doc", "content": [
        {"type": "blockquote", "content": [
            {"type": "code_block", "content": [{"type": "text", "text": "a\nb"}]}
        ]}
    ]}"#;
    assert_eq!(convert(json), ">     a\n>     b");
}

#[test]
fn test_missing_attributes_degrade() {
    let json = r#"{"type": "doc", "content": [
        {"type": "paragraph", "content": [
            {"type": "image", "attrs": {"src": "a.png", "alt": null, "title": null}},
            {"type": "text", "text": "x", "marks": [{"type": "link"}]}
        ]}
    ]}"#;
    assert_eq!(convert(json), "![](a.png)[x]()");
}

#[test]
fn test_unknown_kind_aborts() {
    let json = r#"{"type": "doc", "content": [
        {"type": "paragraph", "content": [{"type": "text", "text": "ok"}]},
        {"type": "table", "content": []}
    ]}"#;
    let result = MarkdownSerializer::new().serialize_json(json);
    assert!(matches!(result, Err(SerializeError::UnknownNode(kind)) if kind == "table"));
}
