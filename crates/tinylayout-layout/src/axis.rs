// crates/tinylayout-layout/src/axis.rs
//! Width and height passes run the same algorithm; `Axis` picks which
//! style and layout fields a pass reads and writes.

use tinylayout_core::{saturate_i16, BoxStyle, ComputedLayout, LayoutDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }

    /// True when `direction` lays children out along this axis.
    pub fn is_main(self, direction: LayoutDirection) -> bool {
        matches!(
            (self, direction),
            (Axis::Horizontal, LayoutDirection::Row) | (Axis::Vertical, LayoutDirection::Column)
        )
    }

    /// Padding and border on both edges.
    pub fn inset(self, style: &BoxStyle) -> i64 {
        match self {
            Axis::Horizontal => style.horizontal_inset().into(),
            Axis::Vertical => style.vertical_inset().into(),
        }
    }

    /// Padding and border on the leading edge.
    pub fn leading_inset(self, style: &BoxStyle) -> i64 {
        let padding = match self {
            Axis::Horizontal => style.padding_left,
            Axis::Vertical => style.padding_top,
        };
        padding as i64 + style.border_width as i64
    }

    pub fn explicit_size(self, style: &BoxStyle) -> Option<i16> {
        match self {
            Axis::Horizontal => style.width.explicit(),
            Axis::Vertical => style.height.explicit(),
        }
    }

    pub fn explicit_min_size(self, style: &BoxStyle) -> Option<i16> {
        match self {
            Axis::Horizontal => style.min_width.explicit(),
            Axis::Vertical => style.min_height.explicit(),
        }
    }

    pub fn size(self, layout: &ComputedLayout) -> i64 {
        match self {
            Axis::Horizontal => layout.width as i64,
            Axis::Vertical => layout.height as i64,
        }
    }

    pub fn set_size(self, layout: &mut ComputedLayout, value: i64) {
        let value = saturate_i16(value);
        match self {
            Axis::Horizontal => layout.width = value,
            Axis::Vertical => layout.height = value,
        }
    }

    pub fn min_size(self, layout: &ComputedLayout) -> i64 {
        match self {
            Axis::Horizontal => layout.min_width as i64,
            Axis::Vertical => layout.min_height as i64,
        }
    }

    pub fn set_min_size(self, layout: &mut ComputedLayout, value: i64) {
        let value = saturate_i16(value);
        match self {
            Axis::Horizontal => layout.min_width = value,
            Axis::Vertical => layout.min_height = value,
        }
    }

    pub fn offset(self, layout: &ComputedLayout) -> i64 {
        match self {
            Axis::Horizontal => layout.x as i64,
            Axis::Vertical => layout.y as i64,
        }
    }

    pub fn set_offset(self, layout: &mut ComputedLayout, value: i64) {
        let value = saturate_i16(value);
        match self {
            Axis::Horizontal => layout.x = value,
            Axis::Vertical => layout.y = value,
        }
    }
}
