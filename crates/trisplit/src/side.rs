//! Direct side-resize policies.
//!
//! A side strategy answers a direct request to set one side's size (a drag
//! of that side's divider, typically). It decides the new size of the
//! targeted side and, for the consume policy, a new size for the opposite
//! side. Setting a side to "absent" collapses it under either policy.
//!
//! | Strategy    | Behavior when the request does not fit                  |
//! |-------------|---------------------------------------------------------|
//! | `Constrain` | Cap the side at the space left once the middle is at    |
//! |             | its minimum; never touch the opposite side              |
//! | `Consume`   | Take the shortfall out of the opposite side, down to    |
//! |             | its minimum                                             |
//!
//! Like the resize strategies, side strategies are pure functions of the
//! layout state.

use serde::{Deserialize, Serialize};
use trisplit_validate::{ValueError, pick_option};

use crate::Side;
use crate::distribute::clamp_max_wins;
use crate::state::SplitLayout;

/// Result of a side strategy.
///
/// `bar` is the targeted side's new size; `None` only for a collapse
/// request. `other: None` means "leave the opposite side unchanged" - a
/// side strategy never collapses the side it was not asked about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideResize {
    pub bar: Option<f64>,
    pub other: Option<f64>,
}

/// Policy for redistributing space when one side is resized directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SideStrategy {
    /// Cap the request to the space available without moving the opposite
    /// side.
    Constrain,
    /// Let the request eat into the opposite side's allocation once the
    /// middle has been squeezed to its minimum.
    #[default]
    Consume,
}

impl SideStrategy {
    /// String identifiers accepted by [`from_name`](Self::from_name).
    pub const OPTIONS: &'static [&'static str] = &["constrain", "consume"];

    /// The strategy's string identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Constrain => "constrain",
            Self::Consume => "consume",
        }
    }

    /// Resolve a string identifier, case-sensitively.
    pub fn from_name(name: &str) -> Result<Self, ValueError> {
        match pick_option("sideResizeStrategy", name, Self::OPTIONS)? {
            0 => Ok(Self::Constrain),
            _ => Ok(Self::Consume),
        }
    }

    /// Resolve an optional identifier; `None` selects the default.
    pub fn from_name_or_default(name: Option<&str>) -> Result<Self, ValueError> {
        match name {
            Some(name) => Self::from_name(name),
            None => Ok(Self::default()),
        }
    }

    /// Decide the new size for `side` given a requested `target`.
    ///
    /// A `target` of `None` collapses the side under either policy, leaving
    /// the opposite side alone; the middle absorbs the freed space.
    #[must_use]
    pub fn propose(self, layout: &SplitLayout, side: Side, target: Option<f64>) -> SideResize {
        let Some(target) = target else {
            return SideResize {
                bar: None,
                other: None,
            };
        };
        match self {
            Self::Constrain => constrain(layout, side, target),
            Self::Consume => consume(layout, side, target),
        }
    }
}

/// Space the targeted side can take without moving the opposite side,
/// with the middle at its minimum.
fn available(layout: &SplitLayout, side: Side) -> f64 {
    let other = layout.side_size(side.opposite()).unwrap_or(0.0);
    layout.container_size() - layout.middle_min() - other
}

fn constrain(layout: &SplitLayout, side: Side, target: f64) -> SideResize {
    let min = layout.side_min(side);
    let own = clamp_max_wins(target, min, layout.side_max(side));
    // The side's own minimum holds even when it exceeds the available
    // space; downstream validation rejects the infeasible total.
    let bar = own.min(available(layout, side)).max(min);
    SideResize {
        bar: Some(bar),
        other: None,
    }
}

fn consume(layout: &SplitLayout, side: Side, target: f64) -> SideResize {
    let min = layout.side_min(side);
    let own = clamp_max_wins(target, min, layout.side_max(side));
    let available = available(layout, side);
    if own <= available {
        return SideResize {
            bar: Some(own),
            other: None,
        };
    }

    let opposite = side.opposite();
    let Some(other_size) = layout.side_size(opposite) else {
        // Nothing to consume from an absent side; degrade to the
        // constrain behavior.
        return SideResize {
            bar: Some(own.min(available).max(min)),
            other: None,
        };
    };

    let shortfall = own - available;
    let other = (other_size - shortfall).max(layout.side_min(opposite));
    let bar = (layout.container_size() - layout.middle_min() - other)
        .min(own)
        .max(min);
    SideResize {
        bar: Some(bar),
        other: Some(other),
    }
}
