#![forbid(unsafe_code)]

//! Constraint-solving core for a resizable three-pane split layout.
//!
//! A container of a given 1D size (a horizontal row or a vertical column) is
//! shared by three segments: a *start* side, a *middle* body, and an *end*
//! side. This crate owns the arithmetic behind that split:
//!
//! - [`SplitLayout`] - the stateful model: container size, per-side bounds,
//!   remembered "ideal" sizes, and committed sizes.
//! - [`ResizeStrategy`] - policy applied when the container size changes
//!   (proportional / preserve-sides / preserve-middle).
//! - [`SideStrategy`] - policy applied when one side is resized directly
//!   (consume / constrain).
//! - [`distribute`] - the shared iterative proportional distributor used by
//!   the resize strategies.
//!
//! The middle segment's size is never stored; it is always derived as
//! `container - start - end`, and its declared minimum is inviolable. Side
//! sizes are `Option<f64>`: `None` means the side is fully collapsed
//! ("absent"), which is distinct from a present side of size `0.0`.
//!
//! # Example
//!
//! ```
//! use trisplit::{ResizeStrategy, SplitConfig, SplitLayout};
//!
//! let mut layout = SplitLayout::new(
//!     SplitConfig::new(600.0)
//!         .start_size(300.0)
//!         .start_min(250.0)
//!         .start_max(350.0)
//!         .end_size(100.0)
//!         .end_min(5.0)
//!         .end_max(150.0)
//!         .middle_min(130.0)
//!         .resize_strategy(ResizeStrategy::Proportional),
//! )?;
//!
//! layout.set_container_size(400.0)?;
//! assert_eq!(layout.start_size(), Some(250.0));
//! assert_eq!(layout.end_size().map(f64::round), Some(20.0));
//! assert_eq!(layout.middle_size().round(), 130.0);
//! # Ok::<(), trisplit::ValueError>(())
//! ```
//!
//! Every mutator validates before it commits: on error the prior state is
//! left untouched, so the layout is never observable half-updated.

pub mod config;
pub mod distribute;
pub mod resize;
pub mod side;
pub mod state;

pub use config::SplitConfig;
pub use distribute::{FlexSlot, clamp_max_wins, distribute};
pub use resize::{ResizeStrategy, SideProposal};
pub use side::{SideResize, SideStrategy};
pub use state::{SplitLayout, SplitSnapshot};
pub use trisplit_validate::{ShapeProblem, ValueError};

use serde::{Deserialize, Serialize};

/// Which side segment an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    /// The leading side (left in a row, top in a column).
    Start,
    /// The trailing side (right in a row, bottom in a column).
    End,
}

impl Side {
    /// The opposite side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    /// Field name of this side's size, as used in validation errors.
    #[must_use]
    pub const fn size_field(self) -> &'static str {
        match self {
            Self::Start => "startSize",
            Self::End => "endSize",
        }
    }
}
