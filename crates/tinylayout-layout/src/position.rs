// crates/tinylayout-layout/src/position.rs

use tinylayout_core::{Alignment, Element, ElementKind};
use tracing::debug;

use crate::axis::Axis;
use crate::config::LayoutConfig;

/// Assign absolute positions to every child, parents first.
pub fn compute_positions(element: &mut Element, config: &LayoutConfig) {
    let Element { style, kind, layout } = element;
    let ElementKind::Container(container) = kind else {
        return;
    };

    for axis in [Axis::Horizontal, Axis::Vertical] {
        let start = axis.offset(layout) + axis.leading_inset(style);
        let inner = axis.size(layout) - axis.inset(style);

        if axis.is_main(container.layout_direction) {
            let mut cursor = 0;
            for child in &mut container.children {
                axis.set_offset(&mut child.layout, start + cursor);
                cursor += axis.size(&child.layout) + container.gap as i64;
            }
        } else {
            for child in &mut container.children {
                let free = inner - axis.size(&child.layout);
                let offset = match config
                    .alignment
                    .placement(container.align_items, child.style.align_self)
                {
                    Alignment::Center => free / 2,
                    Alignment::End => free,
                    _ => 0,
                };
                axis.set_offset(&mut child.layout, start + offset);
            }
        }
    }

    for child in &mut container.children {
        if config.debug {
            debug!(
                "Placed {:?} at ({}, {}) size {}x{}",
                child.element_type(),
                child.layout.x,
                child.layout.y,
                child.layout.width,
                child.layout.height
            );
        }
        compute_positions(child, config);
    }
}
