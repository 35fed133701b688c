// crates/tinylayout-layout/src/lib.rs
//! Six-pass box layout.
//!
//! Every call recomputes the whole tree: reset, width fit sizing, width
//! grow/shrink, text wrapping, height fit sizing, height grow/shrink and
//! positioning. The order is load-bearing: wrapping needs settled widths and
//! text heights need the wrapped line count.

use tinylayout_core::{Element, MeasurementContext};
use tracing::debug;

mod axis;
pub mod config;
pub mod fit;
pub mod grow;
pub mod position;
pub mod wrap;

pub use axis::Axis;
pub use config::*;
pub use wrap::wrap_words;

pub trait LayoutEngine {
    /// Lay out `root` in place. Results land in each node's `layout` field
    /// and in the `wrapped_text` of text nodes.
    fn compute_layout(&mut self, root: &mut Element, measurer: &dyn MeasurementContext);
}

#[derive(Debug, Default, Clone)]
pub struct BoxLayoutEngine {
    config: LayoutConfig,
}

impl BoxLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn with_alignment(mut self, alignment: AlignmentRule) -> Self {
        self.config.alignment = alignment;
        self
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

impl LayoutEngine for BoxLayoutEngine {
    fn compute_layout(&mut self, root: &mut Element, measurer: &dyn MeasurementContext) {
        let config = &self.config;

        fit::reset(root);
        fit::fit_sizing(root, Axis::Horizontal, measurer, config.debug);
        grow::grow_sizing(root, Axis::Horizontal, config);
        wrap::wrap_text(root, measurer, config.debug);
        fit::fit_sizing(root, Axis::Vertical, measurer, config.debug);
        grow::grow_sizing(root, Axis::Vertical, config);
        position::compute_positions(root, config);

        debug!(
            "Layout computed for {} elements, root {}x{} at ({}, {})",
            root.node_count(),
            root.layout.width,
            root.layout.height,
            root.layout.x,
            root.layout.y
        );
    }
}

/// Lay out `root` with the default configuration.
pub fn layout(root: &mut Element, measurer: &dyn MeasurementContext) {
    BoxLayoutEngine::new().compute_layout(root, measurer);
}
