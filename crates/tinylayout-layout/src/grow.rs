// crates/tinylayout-layout/src/grow.rs
//! Grow and shrink distribution, pre-order: a container settles its
//! children before they settle theirs.

use tinylayout_core::{Container, Element, ElementKind};
use tracing::debug;

use crate::axis::Axis;
use crate::config::LayoutConfig;

pub fn grow_sizing(element: &mut Element, axis: Axis, config: &LayoutConfig) {
    let Element { style, kind, layout } = element;
    let ElementKind::Container(container) = kind else {
        return;
    };

    let available = axis.size(layout) - axis.inset(style);

    if axis.is_main(container.layout_direction) {
        distribute_main_axis(container, axis, available);
    } else {
        fit_cross_axis(container, axis, available, config);
    }

    if config.debug {
        for (index, child) in container.children.iter().enumerate() {
            debug!(
                "Grow {} child {}: size={}, min={} (available={})",
                axis.name(),
                index,
                axis.size(&child.layout),
                axis.min_size(&child.layout),
                available
            );
        }
    }

    for child in &mut container.children {
        grow_sizing(child, axis, config);
    }
}

/// Weighted grow when there is room, content grow down towards minimum
/// sizes when only those fit, proportional shrink otherwise.
fn distribute_main_axis(container: &mut Container, axis: Axis, available: i64) {
    let gaps = container.total_gap();
    let children = &mut container.children;

    let used: i64 = children.iter().map(|child| axis.size(&child.layout)).sum();
    let used_min: i64 = children.iter().map(|child| axis.min_size(&child.layout)).sum();
    let remaining = available - used - gaps;
    let remaining_min = available - used_min - gaps;

    if remaining >= 0 {
        let total_grow: i64 = children.iter().map(|child| child.style.grow as i64).sum();
        if total_grow <= 0 {
            return;
        }

        for child in children.iter_mut().filter(|child| child.style.grow > 0) {
            let share = remaining * child.style.grow as i64 / total_grow;
            let size = axis.size(&child.layout) + share;
            axis.set_size(&mut child.layout, size);
        }
    } else if remaining_min >= 0 {
        let has_slack = |child: &Element| axis.size(&child.layout) > axis.min_size(&child.layout);
        let slack_count = children.iter().filter(|child| has_slack(child)).count() as i64;
        if slack_count <= 0 {
            return;
        }

        let share = remaining_min / slack_count;
        for child in children.iter_mut().filter(|child| has_slack(child)) {
            let size = axis.min_size(&child.layout) + share;
            axis.set_size(&mut child.layout, size);
        }
    } else {
        if used_min <= 0 {
            return;
        }

        for child in children.iter_mut() {
            let size = available * axis.min_size(&child.layout) / used_min;
            axis.set_size(&mut child.layout, size);
        }
    }
}

/// Stretch children to the inner size, or clamp the ones that overflow it.
fn fit_cross_axis(container: &mut Container, axis: Axis, available: i64, config: &LayoutConfig) {
    let align_items = container.align_items;

    for child in &mut container.children {
        let stretch = config
            .alignment
            .stretches(align_items, child.style.align_self);

        if stretch || available < axis.size(&child.layout) {
            axis.set_size(&mut child.layout, available);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinylayout_core::{Alignment, ComputedLayout};

    fn sized(width: i16, min_width: i16, grow: u8) -> Element {
        let mut element = Element::text("").with_grow(grow);
        element.layout = ComputedLayout {
            width,
            min_width,
            ..Default::default()
        };
        element
    }

    fn row(width: i16, gap: i16, children: Vec<Element>) -> Element {
        let mut row = Element::row().with_gap(gap).with_children(children);
        row.layout.width = width;
        row
    }

    fn widths(element: &Element) -> Vec<i16> {
        element.children().iter().map(|c| c.layout.width).collect()
    }

    #[test]
    fn test_weighted_grow() {
        let mut tree = row(100, 0, vec![sized(10, 0, 1), sized(20, 0, 0), sized(10, 0, 2)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        // remaining 60: shares 20 and 40
        assert_eq!(widths(&tree), vec![30, 20, 50]);
    }

    #[test]
    fn test_grow_truncates_shares() {
        let mut tree = row(10, 0, vec![sized(0, 0, 1), sized(0, 0, 1), sized(0, 0, 1)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![3, 3, 3]);
    }

    #[test]
    fn test_no_grow_without_weights() {
        let mut tree = row(100, 5, vec![sized(10, 0, 0), sized(10, 0, 0)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![10, 10]);
    }

    #[test]
    fn test_content_grow_splits_remaining_min_space() {
        // widths 60 + 50 + gap 10 overflow 100; mins 20 + 50 + 10 leave 20
        let mut tree = row(100, 10, vec![sized(60, 20, 0), sized(50, 50, 0)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![40, 50]);
    }

    #[test]
    fn test_content_grow_shares_evenly_among_slack_children() {
        let mut tree = row(
            90,
            0,
            vec![sized(50, 20, 0), sized(30, 30, 0), sized(40, 20, 0)],
        );
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        // remaining_min = 90 - 70 = 20, two slack children get 10 each
        assert_eq!(widths(&tree), vec![30, 30, 30]);
    }

    #[test]
    fn test_proportional_shrink_below_min() {
        let mut tree = row(50, 0, vec![sized(80, 40, 0), sized(80, 60, 3)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        // 50 * 40 / 100 and 50 * 60 / 100
        assert_eq!(widths(&tree), vec![20, 30]);
    }

    #[test]
    fn test_shrink_with_zero_min_total_leaves_sizes() {
        let mut tree = row(5, 10, vec![sized(4, 0, 0), sized(4, 0, 0)]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![4, 4]);
    }

    #[test]
    fn test_shrink_with_huge_available_space_does_not_overflow() {
        // negative insets push available to 131072
        let mut tree = row(0, 0, vec![sized(i16::MAX, i16::MAX, 0); 6]);
        tree.style.padding_left = i16::MIN;
        tree.style.padding_right = i16::MIN;
        tree.style.border_width = i16::MIN;
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        // 131072 * 32767 / 196602
        assert_eq!(widths(&tree), vec![21845; 6]);
    }

    #[test]
    fn test_weighted_grow_saturates() {
        let mut tree = row(0, 0, vec![sized(0, 0, 255)]);
        tree.style.padding_left = i16::MIN;
        tree.style.padding_right = i16::MIN;
        tree.style.border_width = i16::MIN;
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![i16::MAX]);
    }

    #[test]
    fn test_available_excludes_padding_and_border() {
        let mut tree = row(30, 0, vec![sized(0, 0, 1)]);
        tree.style.padding_left = 3;
        tree.style.padding_right = 5;
        tree.style.border_width = 1;
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&tree), vec![20]);
    }

    #[test]
    fn test_cross_axis_stretch_and_clamp() {
        let mut column = Element::column()
            .with_align_items(Alignment::Center)
            .with_child(sized(10, 0, 0))
            .with_child(sized(80, 0, 0));
        column.layout.width = 50;
        grow_sizing(&mut column, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&column), vec![10, 50]);

        if let Some(container) = column.as_container_mut() {
            container.align_items = Alignment::Stretch;
        }
        grow_sizing(&mut column, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&column), vec![50, 50]);
    }

    #[test]
    fn test_cross_axis_explicit_align_self_opts_out() {
        let mut column = Element::column()
            .with_child(sized(10, 0, 0).with_align_self(Alignment::Start))
            .with_child(sized(10, 0, 0));
        column.layout.width = 50;
        grow_sizing(&mut column, Axis::Horizontal, &LayoutConfig::default());
        assert_eq!(widths(&column), vec![10, 50]);
    }

    #[test]
    fn test_vertical_axis_distributes_in_columns() {
        let mut column = Element::column()
            .with_gap(2)
            .with_child(Element::text("").with_grow(1))
            .with_child(Element::text(""));
        column.layout.height = 22;
        grow_sizing(&mut column, Axis::Vertical, &LayoutConfig::default());
        let heights: Vec<i16> = column.children().iter().map(|c| c.layout.height).collect();
        assert_eq!(heights, vec![20, 0]);
    }

    #[test]
    fn test_recurses_into_nested_containers() {
        let mut inner = Element::row().with_grow(1).with_child(sized(0, 0, 1));
        inner.layout.width = 10;
        let mut tree = row(40, 0, vec![inner]);
        grow_sizing(&mut tree, Axis::Horizontal, &LayoutConfig::default());

        let inner = &tree.children()[0];
        assert_eq!(inner.layout.width, 40);
        assert_eq!(inner.children()[0].layout.width, 40);
    }
}
