use tinylayout::tinylayout_core::{Element, LayoutDirection, MonospaceMeasurer};
use tinylayout::tinylayout_layout::{layout, AlignmentRule, BoxLayoutEngine, LayoutEngine};
use tinylayout::{parse_document, render_json, render_tree, ReportOptions};

fn sample_row() -> Element {
    Element::row()
        .with_padding(2, 0, 0, 0)
        .with_border_width(1)
        .with_gap(5)
        .with_child(Element::text("a").with_width(10))
        .with_child(Element::text("b").with_width(10))
}

#[test]
fn test_parse_bare_element() {
    let document = parse_document(
        r#"{ "type": "container", "layout_direction": "column", "children": [ { "type": "text", "text": "hi" } ] }"#,
    )
    .unwrap();

    assert_eq!(document.config.alignment, AlignmentRule::Resolved);
    assert!(!document.config.debug);
    assert_eq!(
        document.root.as_container().map(|c| c.layout_direction),
        Some(LayoutDirection::Column)
    );
    assert_eq!(document.root.node_count(), 2);
}

#[test]
fn test_parse_document_with_config() {
    let document = parse_document(
        r#"{
            "config": { "alignment": "legacy" },
            "root": { "type": "container", "width": 200, "children": [] }
        }"#,
    )
    .unwrap();

    assert_eq!(document.config.alignment, AlignmentRule::Legacy);
    assert_eq!(document.root.style.width.explicit(), Some(200));
}

#[test]
fn test_parse_rejects_non_container_root() {
    let err = parse_document(r#"{ "type": "text", "text": "alone" }"#).unwrap_err();
    assert!(err.to_string().contains("container"));
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(parse_document("{ \"type\": ").is_err());
    assert!(parse_document(r#"{ "type": "circle" }"#).is_err());
}

#[test]
fn test_render_tree() {
    let mut tree = sample_row();
    layout(&mut tree, &MonospaceMeasurer::new(10, 12));

    let output = render_tree(&tree, &ReportOptions::default());

    assert_eq!(
        output,
        "Container(row) pos:(0,0) size:(29,14) min:(29,14)\n\
         ├── Text \"a\" pos:(3,1) size:(10,12) min:(10,12)\n\
         └── Text \"b\" pos:(18,1) size:(10,12) min:(10,12)\n"
    );
}

#[test]
fn test_render_tree_with_lines_and_colors() {
    let mut tree = sample_row();
    layout(&mut tree, &MonospaceMeasurer::new(10, 12));

    let output = render_tree(
        &tree,
        &ReportOptions {
            show_lines: true,
            show_colors: true,
        },
    );
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Container(row) pos:(0,0) size:(29,14) min:(29,14)");
    assert!(lines[1].ends_with("[color:#000000FF]"));
    assert_eq!(lines[2], "│   • \"a\"");
    assert_eq!(lines[4], "    • \"b\"");
}

#[test]
fn test_render_nested_prefixes() {
    let mut tree = Element::column()
        .with_child(Element::row().with_child(Element::text("x")))
        .with_child(Element::polygon(vec![0, 0, 4, 0, 4, 4]));

    BoxLayoutEngine::new().compute_layout(&mut tree, &MonospaceMeasurer::new(10, 12));
    let output = render_tree(&tree, &ReportOptions::default());
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("Container(column) "));
    assert!(lines[1].starts_with("├── Container(row) "));
    assert!(lines[2].starts_with("│   └── Text \"x\" "));
    assert!(lines[3].starts_with("└── Polygon [3 points] "));
}

#[test]
fn test_render_json_carries_computed_layout() {
    let mut tree = sample_row();
    layout(&mut tree, &MonospaceMeasurer::new(10, 12));

    let json = render_json(&tree).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["type"], "container");
    assert_eq!(value["layout"]["width"], 29);
    assert_eq!(value["children"][1]["layout"]["x"], 18);
    assert_eq!(value["children"][0]["wrapped_text"][0], "a");
}
