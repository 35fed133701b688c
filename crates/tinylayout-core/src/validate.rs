// crates/tinylayout-core/src/validate.rs
//! Optional structural checks. Layout never runs these and never depends
//! on their outcome; malformed trees still lay out deterministically.

use crate::{BoxStyle, CoreError, Element, ElementKind, Length, Result};

impl Element {
    /// Check this subtree, returning the first problem found in pre-order.
    pub fn validate(&self) -> Result<()> {
        validate_style(&self.style)?;

        match &self.kind {
            ElementKind::Container(container) => {
                non_negative("gap", container.gap)?;
                container.children.iter().try_for_each(Element::validate)
            }
            ElementKind::Polygon(polygon) if polygon.points.len() % 2 != 0 => {
                Err(CoreError::OddPolygonPoints(polygon.points.len()))
            }
            _ => Ok(()),
        }
    }
}

fn validate_style(style: &BoxStyle) -> Result<()> {
    let lengths = [
        ("width", style.width),
        ("height", style.height),
        ("max_width", style.max_width),
        ("max_height", style.max_height),
        ("min_width", style.min_width),
        ("min_height", style.min_height),
    ];
    for (field, length) in lengths {
        if let Length::Pixels(px) = length {
            non_negative(field, px)?;
        }
    }

    let insets = [
        ("padding_left", style.padding_left),
        ("padding_right", style.padding_right),
        ("padding_top", style.padding_top),
        ("padding_bottom", style.padding_bottom),
        ("border_width", style.border_width),
    ];
    for (field, value) in insets {
        non_negative(field, value)?;
    }

    min_within_max("min_width", style.min_width, "max_width", style.max_width)?;
    min_within_max("min_height", style.min_height, "max_height", style.max_height)
}

fn non_negative(field: &'static str, value: i16) -> Result<()> {
    if value < 0 {
        return Err(CoreError::NegativeLength { field, value });
    }
    Ok(())
}

fn min_within_max(
    min_field: &'static str,
    min: Length,
    max_field: &'static str,
    max: Length,
) -> Result<()> {
    match (min.explicit(), max.explicit()) {
        (Some(min), Some(max)) if min > max => Err(CoreError::MinExceedsMax {
            min_field,
            min,
            max_field,
            max,
        }),
        _ => Ok(()),
    }
}
