// crates/tinylayout-layout/src/fit.rs
//! Reset and fit sizing. Fit sizing runs post-order: a container adds up
//! children that are already sized.

use tinylayout_core::{split_words, Container, Element, ElementKind, MeasurementContext, Text};
use tracing::debug;

use crate::axis::Axis;

/// Line spacing used for text height. Not exposed as a style.
pub const LINE_SPACING: i16 = 1;

/// Zero the computed width and height of every node.
pub fn reset(element: &mut Element) {
    element.layout.width = 0;
    element.layout.height = 0;

    if let ElementKind::Container(container) = &mut element.kind {
        container.children.iter_mut().for_each(reset);
    }
}

/// Compute natural and minimum sizes along `axis` for the whole subtree.
pub fn fit_sizing(
    element: &mut Element,
    axis: Axis,
    measurer: &dyn MeasurementContext,
    debug: bool,
) {
    if let ElementKind::Container(container) = &mut element.kind {
        for child in &mut container.children {
            fit_sizing(child, axis, measurer, debug);
        }
    }

    let style = &element.style;
    let inset = axis.inset(style);

    let (size, min_size) = match &element.kind {
        ElementKind::Container(container) => {
            let size = match axis.explicit_size(style) {
                Some(explicit) => explicit as i64,
                None => inset + aggregate(container, axis, |child| axis.size(&child.layout)),
            };
            let min_size = match axis.explicit_min_size(style) {
                Some(explicit) => explicit as i64,
                None => inset + aggregate(container, axis, |child| axis.min_size(&child.layout)),
            };
            (size, min_size)
        }
        ElementKind::Text(text) => match axis {
            Axis::Horizontal => fit_text_width(element, text, inset, measurer),
            Axis::Vertical => fit_text_height(element, text, inset, measurer),
        },
        ElementKind::Polygon(_) => (inset, inset),
    };

    axis.set_size(&mut element.layout, size);
    axis.set_min_size(&mut element.layout, min_size);

    if debug {
        debug!(
            "Fit {:?} {}: size={}, min={}",
            element.element_type(),
            axis.name(),
            size,
            min_size
        );
    }
}

/// Sum of children plus gaps along the main axis, largest child across it.
fn aggregate(container: &Container, axis: Axis, measure: impl Fn(&Element) -> i64) -> i64 {
    if container.children.is_empty() {
        return 0;
    }

    if axis.is_main(container.layout_direction) {
        container.children.iter().map(&measure).sum::<i64>() + container.total_gap()
    } else {
        container.children.iter().map(&measure).fold(0, i64::max)
    }
}

/// Natural width is the unwrapped text; minimum width is the longest word.
fn fit_text_width(
    element: &Element,
    text: &Text,
    inset: i64,
    measurer: &dyn MeasurementContext,
) -> (i64, i64) {
    let width = match element.style.width.explicit() {
        Some(explicit) => explicit as i64,
        None => inset + measurer.measure_text_width(&text.text, text.font) as i64,
    };

    let min_width = match element.style.min_width.explicit() {
        Some(explicit) => explicit as i64,
        None => {
            let longest_word = split_words(&text.text)
                .map(|word| measurer.measure_text_width(word, text.font) as i64)
                .fold(0, i64::max);
            inset + longest_word
        }
    };

    (width, min_width)
}

/// One line height per wrapped line. Explicit heights add to the inset.
fn fit_text_height(
    element: &Element,
    text: &Text,
    inset: i64,
    measurer: &dyn MeasurementContext,
) -> (i64, i64) {
    let height = match element.style.height.explicit() {
        Some(explicit) => inset + explicit as i64,
        None => {
            let line_height = measurer.line_height(LINE_SPACING, text.font) as i64;
            let lines = i64::try_from(text.wrapped_text.len()).unwrap_or(i64::MAX);
            inset.saturating_add(line_height.saturating_mul(lines))
        }
    };

    let min_height = match element.style.min_height.explicit() {
        Some(explicit) => inset + explicit as i64,
        None => height,
    };

    (height, min_height)
}
