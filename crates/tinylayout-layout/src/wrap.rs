// crates/tinylayout-layout/src/wrap.rs

use tinylayout_core::{split_words, Element, ElementKind, FontId, MeasurementContext};
use tracing::debug;

/// Rebuild `wrapped_text` for every text node against its settled width.
pub fn wrap_text(element: &mut Element, measurer: &dyn MeasurementContext, debug: bool) {
    match &mut element.kind {
        ElementKind::Text(text) => {
            let available = element.layout.width as i32 - element.style.horizontal_inset();
            text.wrapped_text = wrap_words(&text.text, text.font, available, measurer);

            if debug {
                debug!(
                    "Wrapped {} chars into {} lines at width {}",
                    text.text.len(),
                    text.wrapped_text.len(),
                    available
                );
            }
        }
        ElementKind::Container(container) => {
            for child in &mut container.children {
                wrap_text(child, measurer, debug);
            }
        }
        ElementKind::Polygon(_) => {}
    }
}

/// Greedy line packing. Words join with a single space; a word that does
/// not fit starts a new line, and a word wider than `available` still gets
/// a line of its own.
pub fn wrap_words(
    text: &str,
    font: FontId,
    available: i32,
    measurer: &dyn MeasurementContext,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in split_words(text) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measurer.measure_text_width(&candidate, font) as i32 > available && !current.is_empty() {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinylayout_core::MonospaceMeasurer;

    fn wrap(text: &str, available: i32) -> Vec<String> {
        wrap_words(text, 0, available, &MonospaceMeasurer::new(10, 12))
    }

    #[test]
    fn test_wraps_two_words_per_line() {
        assert_eq!(wrap("aa bb cc dd", 50), vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(wrap("  aa \n\t bb  ", 100), vec!["aa bb"]);
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        assert_eq!(
            wrap("supercalifragilisticexpialidocious", 40),
            vec!["supercalifragilisticexpialidocious"]
        );
        assert_eq!(wrap("a enormous b", 30), vec!["a", "enormous", "b"]);
    }

    #[test]
    fn test_no_words_no_lines() {
        assert!(wrap("", 100).is_empty());
        assert!(wrap(" \n ", 100).is_empty());
    }

    #[test]
    fn test_negative_width_puts_each_word_on_a_line() {
        assert_eq!(wrap("a b c", -4), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrap_text_replaces_previous_lines() {
        let mut tree = Element::row().with_child(Element::text("one two three").with_padding(1, 1, 0, 0));
        if let Some(container) = tree.as_container_mut() {
            let text = &mut container.children[0];
            text.layout.width = 2 + 70;
            if let ElementKind::Text(inner) = &mut text.kind {
                inner.wrapped_text = vec!["stale".into(); 5];
            }
        }

        wrap_text(&mut tree, &MonospaceMeasurer::new(10, 12), false);

        let wrapped = &tree.children()[0].as_text().unwrap().wrapped_text;
        assert_eq!(wrapped, &vec!["one two".to_string(), "three".to_string()]);
    }
}
