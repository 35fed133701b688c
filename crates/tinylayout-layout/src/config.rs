// crates/tinylayout-layout/src/config.rs

use serde::{Deserialize, Serialize};
use tinylayout_core::Alignment;

/// How a child's `align_self` combines with its parent's `align_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignmentRule {
    /// `align_self` wins unless it is `Auto`. Cross-axis stretching needs the
    /// parent to stretch and the child to be `Auto` or `Stretch`.
    #[default]
    Resolved,
    /// The historical expressions, with `Auto` read as `Stretch` (the old
    /// default). A child stretches when `self == Stretch`, whatever the
    /// parent says, and centers (or ends) when
    /// `(items == Center && self == Stretch) || self == Center`.
    Legacy,
}

impl AlignmentRule {
    /// Whether a child fills the parent's inner size on the cross axis.
    pub fn stretches(self, align_items: Alignment, align_self: Alignment) -> bool {
        match self {
            AlignmentRule::Resolved => {
                align_items == Alignment::Stretch
                    && matches!(align_self, Alignment::Auto | Alignment::Stretch)
            }
            AlignmentRule::Legacy => legacy_self(align_self) == Alignment::Stretch,
        }
    }

    /// Alignment used to offset a child on the cross axis.
    pub fn placement(self, align_items: Alignment, align_self: Alignment) -> Alignment {
        match self {
            AlignmentRule::Resolved => match align_self {
                Alignment::Auto => align_items,
                explicit => explicit,
            },
            AlignmentRule::Legacy => {
                let align_self = legacy_self(align_self);
                let inherits = align_self == Alignment::Stretch;
                if (inherits && align_items == Alignment::Center) || align_self == Alignment::Center {
                    Alignment::Center
                } else if (inherits && align_items == Alignment::End) || align_self == Alignment::End {
                    Alignment::End
                } else {
                    Alignment::Start
                }
            }
        }
    }
}

fn legacy_self(align_self: Alignment) -> Alignment {
    match align_self {
        Alignment::Auto => Alignment::Stretch,
        other => other,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub alignment: AlignmentRule,
    /// Log every node's computed values per pass
    pub debug: bool,
}
