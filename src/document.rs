// src/document.rs
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tinylayout_core::{Element, ElementType};
use tinylayout_layout::LayoutConfig;

/// A layout tree plus the engine settings to lay it out with.
///
/// On disk this is either `{ "config": {...}, "root": {...} }` or a bare
/// root element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub config: LayoutConfig,
    pub root: Element,
}

pub fn parse_document(source: &str) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_str(source).context("Document is not valid JSON")?;

    let document = if value.get("root").is_some() {
        serde_json::from_value::<Document>(value).context("Invalid document")?
    } else {
        let root = serde_json::from_value::<Element>(value).context("Invalid root element")?;
        Document {
            config: LayoutConfig::default(),
            root,
        }
    };

    if document.root.element_type() != ElementType::Container {
        anyhow::bail!(
            "Root element must be a container, found {:?}",
            document.root.element_type()
        );
    }

    Ok(document)
}

pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;

    parse_document(&source).with_context(|| format!("Failed to parse document: {}", path.display()))
}
