// src/report.rs
use anyhow::{Context, Result};
use tinylayout_core::{Color, Element, ElementKind, LayoutDirection};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// List wrapped lines under each text element
    pub show_lines: bool,
    /// Show non-transparent colors in hex
    pub show_colors: bool,
}

/// Render a laid-out tree with box-drawing guides, one element per line.
pub fn render_tree(root: &Element, options: &ReportOptions) -> String {
    let mut output = String::new();
    render_element_tree(&mut output, root, "", None, options);
    output
}

/// Pretty JSON of the tree including computed layout and wrapped lines.
pub fn render_json(root: &Element) -> Result<String> {
    serde_json::to_string_pretty(root).context("Failed to serialize layout tree")
}

fn render_element_tree(
    output: &mut String,
    element: &Element,
    prefix: &str,
    is_last: Option<bool>,
    options: &ReportOptions,
) {
    let (branch, child_prefix) = match is_last {
        None => ("", prefix.to_string()),
        Some(true) => ("└── ", format!("{}    ", prefix)),
        Some(false) => ("├── ", format!("{}│   ", prefix)),
    };

    let layout = &element.layout;
    output.push_str(&format!(
        "{}{}{} pos:({},{}) size:({},{}) min:({},{})",
        prefix,
        branch,
        describe(element),
        layout.x,
        layout.y,
        layout.width,
        layout.height,
        layout.min_width,
        layout.min_height
    ));

    if options.show_colors {
        let mut colors = Vec::new();
        if element.style.background_color != Color::TRANSPARENT {
            colors.push(format!("bg:{}", element.style.background_color.to_hex()));
        }
        if element.style.border_color != Color::TRANSPARENT {
            colors.push(format!("border:{}", element.style.border_color.to_hex()));
        }
        if let Some(text) = element.as_text() {
            colors.push(format!("color:{}", text.color.to_hex()));
        }
        if !colors.is_empty() {
            output.push_str(&format!(" [{}]", colors.join(" ")));
        }
    }
    output.push('\n');

    if options.show_lines {
        if let Some(text) = element.as_text() {
            for line in &text.wrapped_text {
                output.push_str(&format!("{}• {:?}\n", child_prefix, line));
            }
        }
    }

    let children = element.children();
    for (i, child) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        render_element_tree(output, child, &child_prefix, Some(is_last_child), options);
    }
}

fn describe(element: &Element) -> String {
    match &element.kind {
        ElementKind::Container(container) => match container.layout_direction {
            LayoutDirection::Row => "Container(row)".to_string(),
            LayoutDirection::Column => "Container(column)".to_string(),
        },
        ElementKind::Text(text) => format!("Text {:?}", text.text),
        ElementKind::Polygon(polygon) => format!("Polygon [{} points]", polygon.vertices().count()),
    }
}
