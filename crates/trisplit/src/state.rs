//! The stateful split-layout model.
//!
//! [`SplitLayout`] owns the container size, per-side bounds and remembered
//! ideal sizes, the middle segment's minimum, and the two active
//! strategies. Every mutator follows the same shape: validate the input,
//! compute the new geometry on a scratch copy (invoking the relevant
//! strategy), validate the strategy's result against the declared
//! invariants, then commit. On any error the prior state is untouched.
//!
//! Invariants held after every successful mutation:
//!
//! - `middle_size() >= middle_min()` - the middle's minimum is inviolable.
//! - Each present side size lies within that side's `[min, max]`.
//! - `middle_size()` is always derived, never stored.
//!
//! A strategy result that violates these raises a range error instead of
//! being silently clamped; that is a programming-contract violation, not a
//! recoverable condition.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use trisplit_validate::{
    ValueError, check_extrema, check_within, finite_extent, finite_extent_opt,
};

use crate::Side;
use crate::config::SplitConfig;
use crate::distribute::SETTLE_EPS;
use crate::resize::ResizeStrategy;
use crate::side::SideStrategy;

/// One side segment's committed geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SideState {
    min: f64,
    max: Option<f64>,
    /// Committed size; `None` = collapsed.
    size: Option<f64>,
    /// Last size the caller explicitly asked for; survives container
    /// resizes.
    ideal: Option<f64>,
}

/// Stateful three-segment split model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLayout {
    container: f64,
    start: SideState,
    end: SideState,
    middle_min: f64,
    middle_ideal: f64,
    resize_strategy: ResizeStrategy,
    side_strategy: SideStrategy,
}

/// Serializable view of the committed geometry, for diagnostics or replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSnapshot {
    pub container_size: f64,
    pub start_size: Option<f64>,
    pub middle_size: f64,
    pub end_size: Option<f64>,
    pub resize_strategy: ResizeStrategy,
    pub side_resize_strategy: SideStrategy,
}

impl SplitLayout {
    /// Build a layout from a validated configuration.
    ///
    /// Provided sizes become the initial ideals; the middle's ideal is
    /// whatever the sides leave of the container, floored at the middle's
    /// minimum. The active resize strategy then computes the committed
    /// sizes.
    pub fn new(config: SplitConfig) -> Result<Self, ValueError> {
        let container = finite_extent("containerSize", config.container_size)?;

        let start_min = finite_extent("startMin", config.start_min)?;
        let start_max = finite_extent_opt("startMax", config.start_max)?;
        check_extrema("startMin", start_min, start_max)?;
        let start_size = finite_extent_opt("startSize", config.start_size)?;
        if let Some(size) = start_size {
            check_within("startSize", size, start_min, start_max)?;
        }

        let end_min = finite_extent("endMin", config.end_min)?;
        let end_max = finite_extent_opt("endMax", config.end_max)?;
        check_extrema("endMin", end_min, end_max)?;
        let end_size = finite_extent_opt("endSize", config.end_size)?;
        if let Some(size) = end_size {
            check_within("endSize", size, end_min, end_max)?;
        }

        let middle_min = finite_extent("middleMin", config.middle_min)?;
        let middle_ideal =
            (container - start_size.unwrap_or(0.0) - end_size.unwrap_or(0.0)).max(middle_min);

        let mut layout = Self {
            container,
            start: SideState {
                min: start_min,
                max: start_max,
                size: start_size,
                ideal: start_size,
            },
            end: SideState {
                min: end_min,
                max: end_max,
                size: end_size,
                ideal: end_size,
            },
            middle_min,
            middle_ideal,
            resize_strategy: config.resize_strategy.unwrap_or_default(),
            side_strategy: config.side_resize_strategy.unwrap_or_default(),
        };
        layout.recalc()?;
        Ok(layout)
    }

    // --- readable state -------------------------------------------------

    /// Total 1D size shared by the three segments.
    #[must_use]
    pub fn container_size(&self) -> f64 {
        self.container
    }

    #[must_use]
    pub fn start_min(&self) -> f64 {
        self.start.min
    }

    /// Start side's upper bound (`None` = unbounded).
    #[must_use]
    pub fn start_max(&self) -> Option<f64> {
        self.start.max
    }

    /// Start side's committed size (`None` = collapsed).
    #[must_use]
    pub fn start_size(&self) -> Option<f64> {
        self.start.size
    }

    /// Start side's remembered ideal size.
    #[must_use]
    pub fn start_ideal(&self) -> Option<f64> {
        self.start.ideal
    }

    #[must_use]
    pub fn end_min(&self) -> f64 {
        self.end.min
    }

    /// End side's upper bound (`None` = unbounded).
    #[must_use]
    pub fn end_max(&self) -> Option<f64> {
        self.end.max
    }

    /// End side's committed size (`None` = collapsed).
    #[must_use]
    pub fn end_size(&self) -> Option<f64> {
        self.end.size
    }

    /// End side's remembered ideal size.
    #[must_use]
    pub fn end_ideal(&self) -> Option<f64> {
        self.end.ideal
    }

    #[must_use]
    pub fn middle_min(&self) -> f64 {
        self.middle_min
    }

    /// Size the middle segment would occupy if unconstrained.
    #[must_use]
    pub fn middle_ideal(&self) -> f64 {
        self.middle_ideal
    }

    /// The middle segment's committed size, always derived:
    /// `container - start - end` with absent sides contributing 0.
    #[must_use]
    pub fn middle_size(&self) -> f64 {
        self.container - self.start.size.unwrap_or(0.0) - self.end.size.unwrap_or(0.0)
    }

    #[must_use]
    pub fn resize_strategy(&self) -> ResizeStrategy {
        self.resize_strategy
    }

    #[must_use]
    pub fn side_strategy(&self) -> SideStrategy {
        self.side_strategy
    }

    /// A side's lower bound.
    #[must_use]
    pub fn side_min(&self, side: Side) -> f64 {
        self.side_state(side).min
    }

    /// A side's upper bound (`None` = unbounded).
    #[must_use]
    pub fn side_max(&self, side: Side) -> Option<f64> {
        self.side_state(side).max
    }

    /// A side's committed size (`None` = collapsed).
    #[must_use]
    pub fn side_size(&self, side: Side) -> Option<f64> {
        self.side_state(side).size
    }

    /// A side's remembered ideal size.
    #[must_use]
    pub fn side_ideal(&self, side: Side) -> Option<f64> {
        self.side_state(side).ideal
    }

    /// Serializable view of the committed geometry.
    #[must_use]
    pub fn snapshot(&self) -> SplitSnapshot {
        SplitSnapshot {
            container_size: self.container,
            start_size: self.start.size,
            middle_size: self.middle_size(),
            end_size: self.end.size,
            resize_strategy: self.resize_strategy,
            side_resize_strategy: self.side_strategy,
        }
    }

    // --- mutators -------------------------------------------------------

    /// Change the container size and rerun the active resize strategy.
    /// Ideal sizes are untouched.
    pub fn set_container_size(&mut self, size: f64) -> Result<(), ValueError> {
        let size = finite_extent("containerSize", size)?;
        let mut next = *self;
        next.container = size;
        next.recalc()?;
        *self = next;
        Ok(())
    }

    /// Change the start side's bounds and rerun the resize strategy.
    pub fn set_start_extrema(&mut self, min: f64, max: Option<f64>) -> Result<(), ValueError> {
        self.set_side_extrema(Side::Start, min, max)
    }

    /// Change the end side's bounds and rerun the resize strategy.
    pub fn set_end_extrema(&mut self, min: f64, max: Option<f64>) -> Result<(), ValueError> {
        self.set_side_extrema(Side::End, min, max)
    }

    /// Change a side's bounds and rerun the resize strategy.
    pub fn set_side_extrema(
        &mut self,
        side: Side,
        min: f64,
        max: Option<f64>,
    ) -> Result<(), ValueError> {
        let (min_field, max_field) = match side {
            Side::Start => ("startMin", "startMax"),
            Side::End => ("endMin", "endMax"),
        };
        let min = finite_extent(min_field, min)?;
        let max = finite_extent_opt(max_field, max)?;
        check_extrema(min_field, min, max)?;
        let mut next = *self;
        {
            let state = next.side_state_mut(side);
            state.min = min;
            state.max = max;
        }
        next.recalc()?;
        *self = next;
        Ok(())
    }

    /// Change the middle segment's minimum and rerun the resize strategy.
    ///
    /// The middle's ideal is re-derived from the sides' ideals so a raised
    /// minimum immediately becomes the new floor.
    pub fn set_middle_min(&mut self, min: f64) -> Result<(), ValueError> {
        let min = finite_extent("middleMin", min)?;
        let mut next = *self;
        next.middle_min = min;
        next.middle_ideal = (next.container
            - next.start.ideal.unwrap_or(0.0)
            - next.end.ideal.unwrap_or(0.0))
        .max(min);
        next.recalc()?;
        *self = next;
        Ok(())
    }

    /// Swap the resize strategy and rerun it immediately.
    pub fn set_resize_strategy(&mut self, strategy: ResizeStrategy) -> Result<(), ValueError> {
        let mut next = *self;
        next.resize_strategy = strategy;
        next.recalc()?;
        *self = next;
        debug!(strategy = strategy.name(), "resize strategy swapped");
        Ok(())
    }

    /// Swap the resize strategy by its string identifier (`None` selects
    /// the default).
    pub fn set_resize_strategy_by_name(&mut self, name: Option<&str>) -> Result<(), ValueError> {
        self.set_resize_strategy(ResizeStrategy::from_name_or_default(name)?)
    }

    /// Swap the side strategy. Takes effect on the next direct side
    /// resize; nothing is recomputed now.
    pub fn set_side_strategy(&mut self, strategy: SideStrategy) {
        debug!(strategy = strategy.name(), "side strategy swapped");
        self.side_strategy = strategy;
    }

    /// Swap the side strategy by its string identifier (`None` selects the
    /// default).
    pub fn set_side_strategy_by_name(&mut self, name: Option<&str>) -> Result<(), ValueError> {
        self.set_side_strategy(SideStrategy::from_name_or_default(name)?);
        Ok(())
    }

    /// Directly resize the start side (`None` collapses it).
    pub fn set_start_size(&mut self, size: Option<f64>) -> Result<(), ValueError> {
        self.set_side_size(Side::Start, size)
    }

    /// Directly resize the end side (`None` collapses it).
    pub fn set_end_size(&mut self, size: Option<f64>) -> Result<(), ValueError> {
        self.set_side_size(Side::End, size)
    }

    /// Directly resize one side through the active side strategy.
    ///
    /// The committed sizes become the new ideals - a direct resize is a
    /// new expressed intention that persists across container resizes. The
    /// middle's ideal is re-derived, unclamped, from what the sides leave.
    pub fn set_side_size(&mut self, side: Side, size: Option<f64>) -> Result<(), ValueError> {
        let size = finite_extent_opt(side.size_field(), size)?;
        let resize = self.side_strategy.propose(self, side, size);

        let mut next = *self;
        {
            let bar = next.side_state_mut(side);
            bar.size = resize.bar;
            bar.ideal = resize.bar;
        }
        if let Some(other_size) = resize.other {
            let other = next.side_state_mut(side.opposite());
            other.size = Some(other_size);
            other.ideal = Some(other_size);
        }
        // Unfloored budget: an infeasible result must surface, not clamp.
        next.validate_sides(next.container - next.middle_min)?;
        next.middle_ideal =
            next.container - next.start.size.unwrap_or(0.0) - next.end.size.unwrap_or(0.0);
        *self = next;
        debug!(
            side = ?side,
            strategy = self.side_strategy.name(),
            bar = ?resize.bar,
            other = ?resize.other,
            "side resized directly"
        );
        Ok(())
    }

    // --- internals ------------------------------------------------------

    fn side_state(&self, side: Side) -> &SideState {
        match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        }
    }

    fn side_state_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Start => &mut self.start,
            Side::End => &mut self.end,
        }
    }

    /// Rerun the active resize strategy and validate its result.
    ///
    /// Callers mutate a scratch copy, so a validation error here leaves
    /// the committed state untouched.
    fn recalc(&mut self) -> Result<(), ValueError> {
        let proposal = self.resize_strategy.propose(self);
        self.start.size = proposal.start;
        self.end.size = proposal.end;
        self.validate_sides((self.container - self.middle_min).max(0.0))?;
        trace!(
            container = self.container,
            strategy = self.resize_strategy.name(),
            start = ?self.start.size,
            end = ?self.end.size,
            "recalculated side sizes"
        );
        Ok(())
    }

    /// Check per-side bounds and the combined-sum invariant against
    /// `budget` (the space the sides may jointly occupy).
    fn validate_sides(&self, budget: f64) -> Result<(), ValueError> {
        if let Some(size) = self.start.size {
            check_within("startSize", size, self.start.min, self.start.max)?;
        }
        if let Some(size) = self.end.size {
            check_within("endSize", size, self.end.min, self.end.max)?;
        }
        let total = self.start.size.unwrap_or(0.0) + self.end.size.unwrap_or(0.0);
        if total > budget + SETTLE_EPS {
            return Err(ValueError::OutOfRange {
                field: "startSize + endSize",
                value: total,
                min: 0.0,
                max: Some(budget),
                min_inclusive: true,
                max_inclusive: true,
            });
        }
        Ok(())
    }
}
