// crates/tinylayout-core/src/measure.rs
use crate::{saturate_i16, FontId};

/// Text measurement supplied by the host.
///
/// Both queries must be pure: the engine calls them many times per layout
/// and assumes equal arguments give equal answers.
pub trait MeasurementContext {
    /// Pixel width of `text` rendered in `font`.
    fn measure_text_width(&self, text: &str, font: FontId) -> i16;

    /// Vertical advance of one line, `(ascent + descent) * line_spacing`.
    fn line_height(&self, line_spacing: i16, font: FontId) -> i16;
}

impl<M: MeasurementContext + ?Sized> MeasurementContext for &M {
    fn measure_text_width(&self, text: &str, font: FontId) -> i16 {
        (**self).measure_text_width(text, font)
    }

    fn line_height(&self, line_spacing: i16, font: FontId) -> i16 {
        (**self).line_height(line_spacing, font)
    }
}

/// Fixed-metric measurer: every character has the same advance.
///
/// Ignores the font id. Useful for terminals, tests and the debug CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasurer {
    pub char_width: i16,
    pub line_height: i16,
}

impl MonospaceMeasurer {
    pub fn new(char_width: i16, line_height: i16) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl MeasurementContext for MonospaceMeasurer {
    fn measure_text_width(&self, text: &str, _font: FontId) -> i16 {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        saturate_i16(chars.saturating_mul(self.char_width as i32))
    }

    fn line_height(&self, line_spacing: i16, _font: FontId) -> i16 {
        saturate_i16(self.line_height as i32 * line_spacing as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_width() {
        let measurer = MonospaceMeasurer::new(10, 12);
        assert_eq!(measurer.measure_text_width("", 0), 0);
        assert_eq!(measurer.measure_text_width("aa bb", 0), 50);
        assert_eq!(measurer.measure_text_width("héllo", 3), 50);
        assert_eq!(measurer.line_height(1, 0), 12);
        assert_eq!(measurer.line_height(2, 0), 24);
    }

    #[test]
    fn test_monospace_saturates() {
        let measurer = MonospaceMeasurer::new(1000, 30000);
        let long = "x".repeat(100);
        assert_eq!(measurer.measure_text_width(&long, 0), i16::MAX);
        assert_eq!(measurer.line_height(2, 0), i16::MAX);
    }

    #[test]
    fn test_measurer_by_reference() {
        fn width_of(measurer: impl MeasurementContext) -> i16 {
            measurer.measure_text_width("abc", 0)
        }
        let measurer = MonospaceMeasurer::default();
        assert_eq!(width_of(&measurer), 24);
    }
}
