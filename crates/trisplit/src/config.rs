//! Construction input for [`SplitLayout`](crate::SplitLayout).
//!
//! [`SplitConfig`] carries the initial container size plus optional bounds,
//! sizes, and strategy selections. Unspecified minimums default to 0,
//! unspecified maximums to unbounded, unspecified sizes to absent, and
//! unspecified strategies to their documented defaults (preserve-sides /
//! consume).
//!
//! The config derives serde with camelCase field names, so
//! configuration-driven setups can feed it JSON/TOML directly; on that path
//! an unrecognized field or a missing `containerSize` is rejected by serde,
//! and a non-string strategy selector fails with serde's type error. The
//! numeric validation itself happens in `SplitLayout::new`, which is the
//! only consumer.

use serde::{Deserialize, Serialize};

use crate::resize::ResizeStrategy;
use crate::side::SideStrategy;

/// Construction input for a split layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplitConfig {
    /// Total 1D size of the container. Required.
    pub container_size: f64,
    /// Start side's lower bound (default 0).
    #[serde(default)]
    pub start_min: f64,
    /// Start side's upper bound (default unbounded).
    #[serde(default)]
    pub start_max: Option<f64>,
    /// Start side's initial size (default absent).
    #[serde(default)]
    pub start_size: Option<f64>,
    /// Middle segment's lower bound (default 0).
    #[serde(default)]
    pub middle_min: f64,
    /// End side's lower bound (default 0).
    #[serde(default)]
    pub end_min: f64,
    /// End side's upper bound (default unbounded).
    #[serde(default)]
    pub end_max: Option<f64>,
    /// End side's initial size (default absent).
    #[serde(default)]
    pub end_size: Option<f64>,
    /// Container-resize policy (default preserve-sides).
    #[serde(default)]
    pub resize_strategy: Option<ResizeStrategy>,
    /// Direct side-resize policy (default consume).
    #[serde(default)]
    pub side_resize_strategy: Option<SideStrategy>,
}

impl SplitConfig {
    /// A config with the given container size and every other field at its
    /// default.
    #[must_use]
    pub fn new(container_size: f64) -> Self {
        Self {
            container_size,
            start_min: 0.0,
            start_max: None,
            start_size: None,
            middle_min: 0.0,
            end_min: 0.0,
            end_max: None,
            end_size: None,
            resize_strategy: None,
            side_resize_strategy: None,
        }
    }

    /// Set the start side's lower bound.
    #[must_use]
    pub fn start_min(mut self, min: f64) -> Self {
        self.start_min = min;
        self
    }

    /// Set the start side's upper bound.
    #[must_use]
    pub fn start_max(mut self, max: f64) -> Self {
        self.start_max = Some(max);
        self
    }

    /// Set the start side's initial size.
    #[must_use]
    pub fn start_size(mut self, size: f64) -> Self {
        self.start_size = Some(size);
        self
    }

    /// Set the middle segment's lower bound.
    #[must_use]
    pub fn middle_min(mut self, min: f64) -> Self {
        self.middle_min = min;
        self
    }

    /// Set the end side's lower bound.
    #[must_use]
    pub fn end_min(mut self, min: f64) -> Self {
        self.end_min = min;
        self
    }

    /// Set the end side's upper bound.
    #[must_use]
    pub fn end_max(mut self, max: f64) -> Self {
        self.end_max = Some(max);
        self
    }

    /// Set the end side's initial size.
    #[must_use]
    pub fn end_size(mut self, size: f64) -> Self {
        self.end_size = Some(size);
        self
    }

    /// Select the container-resize policy.
    #[must_use]
    pub fn resize_strategy(mut self, strategy: ResizeStrategy) -> Self {
        self.resize_strategy = Some(strategy);
        self
    }

    /// Select the direct side-resize policy.
    #[must_use]
    pub fn side_resize_strategy(mut self, strategy: SideStrategy) -> Self {
        self.side_resize_strategy = Some(strategy);
        self
    }
}
