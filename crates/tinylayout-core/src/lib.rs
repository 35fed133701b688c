// crates/tinylayout-core/src/lib.rs
pub mod elements;
pub mod layout_units;
pub mod measure;
pub mod text;
pub mod validate;

pub use elements::*;
pub use layout_units::*;
pub use measure::*;
pub use text::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("{field} has negative value {value}")]
    NegativeLength { field: &'static str, value: i16 },

    #[error("{min_field} ({min}) exceeds {max_field} ({max})")]
    MinExceedsMax {
        min_field: &'static str,
        min: i16,
        max_field: &'static str,
        max: i16,
    },

    #[error("Polygon has an odd number of coordinates: {0}")]
    OddPolygonPoints(usize),

    #[error("Invalid length: {0}")]
    InvalidLength(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

/// Narrow a wide intermediate back into the 16-bit geometry range.
pub fn saturate_i16(value: impl Into<i64>) -> i16 {
    value.into().clamp(i16::MIN as i64, i16::MAX as i64) as i16
}
