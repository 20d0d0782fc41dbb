//! Container-resize policies.
//!
//! A resize strategy answers one question: given the layout's current
//! container size, bounds, and remembered ideal sizes, what should the two
//! side segments get? The middle segment is never part of the answer; it is
//! derived from whatever the sides leave behind.
//!
//! | Strategy         | Behavior on container change                        |
//! |------------------|-----------------------------------------------------|
//! | `Proportional`   | All three segments share the change by weight       |
//! | `PreserveSides`  | Sides hold their ideals; middle absorbs the change  |
//! | `PreserveMiddle` | Middle holds its ideal; sides absorb the change     |
//!
//! Strategies are pure: they read the layout through `&SplitLayout` getters
//! and return a [`SideProposal`] without touching any state.

use serde::{Deserialize, Serialize};
use trisplit_validate::{ValueError, pick_option};

use crate::distribute::{FlexSlot, clamp_max_wins, distribute};
use crate::state::SplitLayout;

/// Sizes proposed for the two sides; `None` collapses that side, handing
/// all of its space to the middle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SideProposal {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl SideProposal {
    /// Both sides collapsed; the middle takes the whole container.
    pub const COLLAPSED: Self = Self {
        start: None,
        end: None,
    };
}

/// Policy for redistributing space when the container size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeStrategy {
    /// Sides, middle, and their bounds all flex in proportion to their
    /// ideal sizes.
    Proportional,
    /// Hold each side at its clamped ideal; the middle absorbs all change
    /// down to its minimum.
    #[default]
    PreserveSides,
    /// Hold the middle at its ideal; sides absorb change down to their
    /// minimums.
    PreserveMiddle,
}

impl ResizeStrategy {
    /// String identifiers accepted by [`from_name`](Self::from_name), in
    /// declaration order.
    pub const OPTIONS: &'static [&'static str] =
        &["proportional", "preserveSides", "preserveMiddle"];

    /// The strategy's string identifier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::PreserveSides => "preserveSides",
            Self::PreserveMiddle => "preserveMiddle",
        }
    }

    /// Resolve a string identifier, case-sensitively.
    pub fn from_name(name: &str) -> Result<Self, ValueError> {
        match pick_option("resizeStrategy", name, Self::OPTIONS)? {
            0 => Ok(Self::Proportional),
            1 => Ok(Self::PreserveSides),
            _ => Ok(Self::PreserveMiddle),
        }
    }

    /// Resolve an optional identifier; `None` selects the default.
    pub fn from_name_or_default(name: Option<&str>) -> Result<Self, ValueError> {
        match name {
            Some(name) => Self::from_name(name),
            None => Ok(Self::default()),
        }
    }

    /// Compute the sides' sizes for the layout's current container size.
    #[must_use]
    pub fn propose(self, layout: &SplitLayout) -> SideProposal {
        match self {
            Self::Proportional => proportional(layout),
            Self::PreserveSides => preserve_sides(layout),
            Self::PreserveMiddle => preserve_middle(layout),
        }
    }
}

/// Minimum space a side demands for feasibility checks: its declared
/// minimum when it has an ideal size, else 0 (an absent side asks nothing).
fn effective_min(ideal: Option<f64>, min: f64) -> f64 {
    if ideal.is_some() { min } else { 0.0 }
}

fn start_slot(layout: &SplitLayout) -> FlexSlot {
    FlexSlot {
        ideal: layout.start_ideal(),
        min: layout.start_min(),
        max: layout.start_max(),
    }
}

fn end_slot(layout: &SplitLayout) -> FlexSlot {
    FlexSlot {
        ideal: layout.end_ideal(),
        min: layout.end_min(),
        max: layout.end_max(),
    }
}

fn proportional(layout: &SplitLayout) -> SideProposal {
    let start_floor = effective_min(layout.start_ideal(), layout.start_min());
    let end_floor = effective_min(layout.end_ideal(), layout.end_min());
    if layout.container_size() < layout.middle_min() + start_floor + end_floor {
        return SideProposal::COLLAPSED;
    }
    let sizes = distribute(
        &[
            start_slot(layout),
            FlexSlot::active(layout.middle_ideal(), layout.middle_min(), None),
            end_slot(layout),
        ],
        layout.container_size(),
    );
    SideProposal {
        start: sizes[0],
        end: sizes[2],
    }
}

fn preserve_sides(layout: &SplitLayout) -> SideProposal {
    let start_floor = effective_min(layout.start_ideal(), layout.start_min());
    let end_floor = effective_min(layout.end_ideal(), layout.end_min());
    let max_sides = layout.container_size() - layout.middle_min();
    if max_sides < start_floor + end_floor {
        return SideProposal::COLLAPSED;
    }

    let start_held = layout
        .start_ideal()
        .map(|ideal| clamp_max_wins(ideal, layout.start_min(), layout.start_max()));
    let end_held = layout
        .end_ideal()
        .map(|ideal| clamp_max_wins(ideal, layout.end_min(), layout.end_max()));

    if max_sides < start_held.unwrap_or(0.0) + end_held.unwrap_or(0.0) {
        // Not enough room once the middle is squeezed to its minimum; let
        // the sides flex against a pinned middle.
        let sizes = distribute(
            &[
                start_slot(layout),
                FlexSlot::pinned(layout.middle_min()),
                end_slot(layout),
            ],
            layout.container_size(),
        );
        return SideProposal {
            start: sizes[0],
            end: sizes[2],
        };
    }

    SideProposal {
        start: start_held,
        end: end_held,
    }
}

fn preserve_middle(layout: &SplitLayout) -> SideProposal {
    let start_floor = effective_min(layout.start_ideal(), layout.start_min());
    let end_floor = effective_min(layout.end_ideal(), layout.end_min());
    let middle_max = layout.container_size() - start_floor - end_floor;
    if middle_max < layout.middle_min() {
        return SideProposal::COLLAPSED;
    }
    if middle_max < layout.middle_ideal() {
        // The middle cannot reach its ideal even with both sides at their
        // minimums; give the sides exactly those minimums.
        return SideProposal {
            start: layout.start_ideal().map(|_| layout.start_min()),
            end: layout.end_ideal().map(|_| layout.end_min()),
        };
    }
    let sizes = distribute(
        &[
            start_slot(layout),
            FlexSlot::pinned(layout.middle_ideal()),
            end_slot(layout),
        ],
        layout.container_size(),
    );
    SideProposal {
        start: sizes[0],
        end: sizes[2],
    }
}
