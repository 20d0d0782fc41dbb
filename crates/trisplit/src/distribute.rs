//! Iterative proportional distribution over bounded slots.
//!
//! This is the shared solver behind the resize strategies: given up to three
//! slots, each either inactive (absent, contributes nothing) or active
//! (weighted by its ideal size and bounded by `[min, max]`), find the sizes
//! that consume a target total in proportion to weight without violating any
//! bound.
//!
//! The algorithm walks toward the target in rounds. Each round computes the
//! remaining space, splits it across the still-flexible slots in proportion
//! to their weights, and clamps each proposal to its bounds. A slot freezes
//! when a bound stops it or when it can no longer move; once every slot is
//! frozen the distribution is final. A round either freezes at least one
//! slot or lands the total exactly on the target (which freezes everything
//! next round), so the loop terminates after a handful of rounds.
//!
//! The distribution is stable: feeding the outputs back in as ideals
//! reproduces them unchanged.

/// Movement below this threshold counts as "cannot move", freezing a slot.
///
/// Keeps residual floating-point dust from spinning the loop; far below any
/// meaningful layout extent.
pub(crate) const SETTLE_EPS: f64 = 1e-9;

/// One slot fed to [`distribute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlexSlot {
    /// Weight and starting size. `None` marks the slot inactive: it takes
    /// no space and its output is reported back as absent.
    pub ideal: Option<f64>,
    /// Lower bound for an active slot.
    pub min: f64,
    /// Upper bound for an active slot (`None` = unbounded).
    pub max: Option<f64>,
}

impl FlexSlot {
    /// A slot excluded from distribution entirely.
    pub const INACTIVE: Self = Self {
        ideal: None,
        min: 0.0,
        max: None,
    };

    /// An active slot with the given weight and bounds.
    #[must_use]
    pub const fn active(ideal: f64, min: f64, max: Option<f64>) -> Self {
        Self {
            ideal: Some(ideal),
            min,
            max,
        }
    }

    /// A slot pinned to a single value (`weight = min = max`).
    #[must_use]
    pub const fn pinned(value: f64) -> Self {
        Self {
            ideal: Some(value),
            min: value,
            max: Some(value),
        }
    }
}

/// Clamp where the upper bound takes precedence over the lower one.
///
/// The lower bound is applied first, the upper bound second, so the result
/// never exceeds `max` even when `min > max`.
#[inline]
#[must_use]
pub fn clamp_max_wins(value: f64, min: f64, max: Option<f64>) -> f64 {
    let value = value.max(min);
    match max {
        Some(max) => value.min(max),
        None => value,
    }
}

/// Distribute `target` across `slots`, proportionally to weight and subject
/// to each active slot's bounds.
///
/// Inactive slots (`ideal: None`) contribute zero and come back as `None`
/// regardless of the numeric result. Active slots come back as `Some(size)`.
#[must_use]
pub fn distribute(slots: &[FlexSlot], target: f64) -> Vec<Option<f64>> {
    let mut sizes = vec![0.0f64; slots.len()];
    let mut weights = vec![0.0f64; slots.len()];
    let mut flexible = vec![false; slots.len()];

    for (i, slot) in slots.iter().enumerate() {
        if let Some(ideal) = slot.ideal {
            sizes[i] = ideal;
            weights[i] = ideal;
            flexible[i] = true;
        }
    }

    while flexible.iter().any(|&f| f) {
        let flex_weight: f64 = weights
            .iter()
            .zip(&flexible)
            .filter(|&(_, &f)| f)
            .map(|(w, _)| w)
            .sum();

        // With no weight left to move proportionally, nothing can flex;
        // settle every remaining slot at its clamped size so a binding
        // minimum still takes effect.
        if flex_weight <= 0.0 {
            for (i, slot) in slots.iter().enumerate() {
                if flexible[i] {
                    sizes[i] = clamp_max_wins(sizes[i], slot.min, slot.max);
                    flexible[i] = false;
                }
            }
            break;
        }

        let remaining = target - sizes.iter().sum::<f64>();
        let ratio = remaining / flex_weight;

        for (i, slot) in slots.iter().enumerate() {
            if !flexible[i] {
                continue;
            }
            let proposed = sizes[i] + weights[i] * ratio;
            let clamped = clamp_max_wins(proposed, slot.min, slot.max);
            if (clamped - sizes[i]).abs() <= SETTLE_EPS {
                // No movement possible; hold the current size.
                flexible[i] = false;
            } else if clamped != proposed {
                // A bound was hit; settle there.
                sizes[i] = clamped;
                flexible[i] = false;
            } else {
                sizes[i] = proposed;
            }
        }
    }

    slots
        .iter()
        .zip(sizes)
        .map(|(slot, size)| slot.ideal.map(|_| size))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(actual: Option<f64>, expected: f64) -> bool {
        matches!(actual, Some(v) if (v - expected).abs() < 1e-6)
    }

    #[test]
    fn exact_fit_leaves_ideals_unchanged() {
        let out = distribute(
            &[
                FlexSlot::active(300.0, 250.0, Some(350.0)),
                FlexSlot::active(200.0, 130.0, None),
                FlexSlot::active(100.0, 5.0, Some(150.0)),
            ],
            600.0,
        );
        assert_eq!(out, vec![Some(300.0), Some(200.0), Some(100.0)]);
    }

    #[test]
    fn shrink_clamps_at_minimums_and_rebalances() {
        // Two slots bottom out; the third absorbs the rest of the deficit.
        let out = distribute(
            &[
                FlexSlot::active(300.0, 250.0, Some(350.0)),
                FlexSlot::active(200.0, 130.0, None),
                FlexSlot::active(100.0, 5.0, Some(150.0)),
            ],
            400.0,
        );
        assert!(close(out[0], 250.0), "start pinned at min, got {out:?}");
        assert!(close(out[1], 130.0), "middle pinned at min, got {out:?}");
        assert!(close(out[2], 20.0), "end absorbs remainder, got {out:?}");
    }

    #[test]
    fn grow_caps_at_maximums() {
        let out = distribute(
            &[
                FlexSlot::active(100.0, 0.0, Some(120.0)),
                FlexSlot::active(100.0, 0.0, None),
            ],
            400.0,
        );
        assert!(close(out[0], 120.0), "got {out:?}");
        assert!(close(out[1], 280.0), "got {out:?}");
    }

    #[test]
    fn inactive_slot_stays_absent_and_takes_no_space() {
        let out = distribute(
            &[
                FlexSlot::INACTIVE,
                FlexSlot::active(100.0, 0.0, None),
                FlexSlot::INACTIVE,
            ],
            250.0,
        );
        assert_eq!(out[0], None);
        assert!(close(out[1], 250.0), "got {out:?}");
        assert_eq!(out[2], None);
    }

    #[test]
    fn pinned_slot_never_moves() {
        let out = distribute(
            &[
                FlexSlot::active(100.0, 0.0, None),
                FlexSlot::pinned(130.0),
                FlexSlot::active(50.0, 0.0, None),
            ],
            600.0,
        );
        assert!(close(out[1], 130.0), "got {out:?}");
        // Remaining 470 split 2:1 by weight.
        assert!(close(out[0], 313.333333), "got {out:?}");
        assert!(close(out[2], 156.666667), "got {out:?}");
    }

    #[test]
    fn zero_weight_slot_settles_at_its_lower_bound() {
        let out = distribute(
            &[
                FlexSlot::active(0.0, 5.0, Some(100.0)),
                FlexSlot::active(10.0, 0.0, None),
            ],
            100.0,
        );
        assert!(close(out[0], 5.0), "got {out:?}");
        assert!(close(out[1], 95.0), "got {out:?}");
    }

    #[test]
    fn all_zero_weights_freeze_immediately() {
        let out = distribute(
            &[
                FlexSlot::active(0.0, 0.0, None),
                FlexSlot::active(0.0, 0.0, None),
            ],
            100.0,
        );
        assert_eq!(out, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn zero_weight_pool_still_honors_minimums() {
        // No weight anywhere, but one slot's lower bound binds.
        let out = distribute(
            &[
                FlexSlot::active(0.0, 50.0, None),
                FlexSlot::active(0.0, 0.0, None),
            ],
            100.0,
        );
        assert_eq!(out, vec![Some(50.0), Some(0.0)]);
    }

    #[test]
    fn clamp_max_wins_lets_max_dominate_inverted_bounds() {
        assert_eq!(clamp_max_wins(50.0, 10.0, Some(40.0)), 40.0);
        assert_eq!(clamp_max_wins(5.0, 10.0, Some(40.0)), 10.0);
        assert_eq!(clamp_max_wins(5.0, 30.0, Some(20.0)), 20.0);
        assert_eq!(clamp_max_wins(1e12, 0.0, None), 1e12);
    }

    fn slot_strategy() -> impl Strategy<Value = FlexSlot> {
        (
            prop::option::weighted(0.8, 0.0f64..500.0),
            0.0f64..200.0,
            prop::option::of(200.0f64..800.0),
        )
            .prop_map(|(ideal, min, max)| FlexSlot { ideal, min, max })
    }

    /// Like [`slot_strategy`] but with ideals inside their own bounds, the
    /// shape the resize strategies feed in after their feasibility checks.
    fn in_bounds_slot_strategy() -> impl Strategy<Value = FlexSlot> {
        (
            prop::bool::ANY,
            0.0f64..200.0,
            0.0f64..500.0,
            prop::option::of(200.0f64..800.0),
        )
            .prop_map(|(active, min, extra, max)| {
                if active {
                    FlexSlot::active(clamp_max_wins(min + extra, min, max), min, max)
                } else {
                    FlexSlot::INACTIVE
                }
            })
    }

    proptest! {
        #[test]
        fn outputs_respect_bounds(
            slots in prop::collection::vec(slot_strategy(), 1..=3),
            target in 0.0f64..2000.0,
        ) {
            let out = distribute(&slots, target);
            for (slot, size) in slots.iter().zip(&out) {
                match (slot.ideal, size) {
                    (None, got) => prop_assert_eq!(*got, None),
                    (Some(_), Some(size)) => {
                        let lo = match slot.max {
                            // Inverted bounds: max wins.
                            Some(max) if max < slot.min => max,
                            _ => slot.min,
                        };
                        prop_assert!(*size >= lo - 1e-6, "size {} below {}", size, lo);
                        if let Some(max) = slot.max {
                            prop_assert!(*size <= max + 1e-6, "size {} above {}", size, max);
                        }
                    }
                    (Some(_), None) => prop_assert!(false, "active slot reported absent"),
                }
            }
        }

        #[test]
        fn distribution_is_a_fixed_point(
            slots in prop::collection::vec(in_bounds_slot_strategy(), 1..=3),
            target in 0.0f64..2000.0,
        ) {
            let out = distribute(&slots, target);
            let again: Vec<FlexSlot> = slots
                .iter()
                .zip(&out)
                .map(|(slot, size)| FlexSlot { ideal: *size, ..*slot })
                .collect();
            let out2 = distribute(&again, target);
            for (a, b) in out.iter().zip(&out2) {
                match (a, b) {
                    (None, None) => {}
                    (Some(a), Some(b)) => prop_assert!((a - b).abs() < 1e-6, "{} vs {}", a, b),
                    _ => prop_assert!(false, "presence changed between runs"),
                }
            }
        }
    }
}
