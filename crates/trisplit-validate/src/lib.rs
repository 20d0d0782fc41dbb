#![forbid(unsafe_code)]

//! Typed value validation for the trisplit layout core.
//!
//! The layout crate treats validation as an external collaborator with one
//! contract: every check either passes the value through or raises a typed
//! error describing the offending value and the expected constraint. This
//! crate provides that taxonomy:
//!
//! - [`ValueError::WrongType`] - a value of the wrong primitive kind.
//! - [`ValueError::UnknownOption`] - a string selector outside its option
//!   list (the error carries the full list).
//! - [`ValueError::OutOfRange`] - a number outside its interval, with
//!   per-bound inclusivity flags and an optional (unbounded) upper bound.
//! - [`ValueError::Shape`] - a structural input missing a required field or
//!   carrying an unrecognized one.
//!
//! All checks are synchronous and side-effect free; nothing here is caught
//! or retried internally.

use std::fmt;

/// Structural problem detected in a configuration object or strategy result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeProblem {
    /// A required field is absent.
    MissingField,
    /// A field not part of the declared shape is present.
    UnknownField,
}

/// Validation failure raised at the point of an invalid input.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueError {
    /// A value expected to be a specific primitive kind is not.
    WrongType {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },
    /// A string selector is not among the recognized options.
    UnknownOption {
        field: &'static str,
        value: String,
        options: &'static [&'static str],
    },
    /// A numeric value lies outside its declared interval.
    ///
    /// `max: None` means the interval is unbounded above. The inclusivity
    /// flags describe which endpoints belong to the interval.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: Option<f64>,
        min_inclusive: bool,
        max_inclusive: bool,
    },
    /// A structural input does not match its declared shape.
    Shape {
        field: &'static str,
        problem: ShapeProblem,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongType {
                field,
                expected,
                actual,
            } => write!(f, "{field}: expected {expected}, got {actual}"),
            Self::UnknownOption {
                field,
                value,
                options,
            } => write!(
                f,
                "{field}: unknown option {value:?} (expected one of: {})",
                options.join(", ")
            ),
            Self::OutOfRange {
                field,
                value,
                min,
                max,
                min_inclusive,
                max_inclusive,
            } => {
                let open = if *min_inclusive { '[' } else { '(' };
                let close = if *max_inclusive { ']' } else { ')' };
                match max {
                    Some(max) => {
                        write!(f, "{field}={value} outside {open}{min}, {max}{close}")
                    }
                    None => write!(f, "{field}={value} outside {open}{min}, unbounded{close}"),
                }
            }
            Self::Shape { field, problem } => match problem {
                ShapeProblem::MissingField => write!(f, "{field}: missing required field"),
                ShapeProblem::UnknownField => write!(f, "{field}: unrecognized field"),
            },
        }
    }
}

impl std::error::Error for ValueError {}

/// Validate that `value` is a finite extent in `[0, +inf)`.
pub fn finite_extent(field: &'static str, value: f64) -> Result<f64, ValueError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValueError::OutOfRange {
            field,
            value,
            min: 0.0,
            max: None,
            min_inclusive: true,
            max_inclusive: false,
        })
    }
}

/// Validate an optional extent, passing `None` (absent / unbounded) through.
pub fn finite_extent_opt(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<f64>, ValueError> {
    match value {
        Some(value) => finite_extent(field, value).map(Some),
        None => Ok(None),
    }
}

/// Validate a `min`/`max` pair: `0 <= min` and, when `max` is bounded,
/// `min <= max`.
pub fn check_extrema(field: &'static str, min: f64, max: Option<f64>) -> Result<(), ValueError> {
    finite_extent(field, min)?;
    if let Some(max) = max
        && min > max
    {
        return Err(ValueError::OutOfRange {
            field,
            value: min,
            min: 0.0,
            max: Some(max),
            min_inclusive: true,
            max_inclusive: true,
        });
    }
    Ok(())
}

/// Validate that `value` lies inside `[min, max]` (`max: None` = unbounded).
pub fn check_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: Option<f64>,
) -> Result<(), ValueError> {
    let below = value < min;
    let above = matches!(max, Some(max) if value > max);
    if below || above {
        return Err(ValueError::OutOfRange {
            field,
            value,
            min,
            max,
            min_inclusive: true,
            max_inclusive: true,
        });
    }
    Ok(())
}

/// Resolve a string selector against a static option list.
///
/// Matching is case-sensitive and exact. Returns the index of the matched
/// option so callers can map it back onto their own enum.
pub fn pick_option(
    field: &'static str,
    value: &str,
    options: &'static [&'static str],
) -> Result<usize, ValueError> {
    options
        .iter()
        .position(|option| *option == value)
        .ok_or_else(|| ValueError::UnknownOption {
            field,
            value: value.to_string(),
            options,
        })
}
