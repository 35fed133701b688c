// src/lib.rs
//! Embedding surface for tinylayout: JSON documents in, laid-out trees and
//! human-readable reports out. The layout itself lives in
//! `tinylayout-layout`; the element tree in `tinylayout-core`.

pub mod document;
pub mod report;

pub use document::{load_document, parse_document, Document};
pub use report::{render_json, render_tree, ReportOptions};
pub use tinylayout_core;
pub use tinylayout_layout;
