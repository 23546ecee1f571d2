//! Bounds and error intervals
//!
//! Both are ordered pairs. A bound may be open on either side; an open side
//! is stored as an infinity and written as `null` when serialized.

use serde::{Deserialize, Serialize};
use std::f64::{INFINITY, NEG_INFINITY};
use std::fmt;

/// `(min, max)` limits of a parameter during fitting.
///
/// `min < max` is expected but not enforced; the table only guarantees the
/// pair shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum allowed value for the parameter
    pub min: f64,

    /// Maximum allowed value for the parameter
    pub max: f64,
}

impl Serialize for Bounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut state = serializer.serialize_tuple(2)?;

        // Handle infinity values specially
        if self.min.is_infinite() && self.min.is_sign_negative() {
            state.serialize_element(&serde_json::Value::Null)?;
        } else {
            state.serialize_element(&self.min)?;
        }

        if self.max.is_infinite() && self.max.is_sign_positive() {
            state.serialize_element(&serde_json::Value::Null)?;
        } else {
            state.serialize_element(&self.max)?;
        }

        state.end()
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (min, max) = <(Option<f64>, Option<f64>)>::deserialize(deserializer)?;

        Ok(Bounds {
            min: min.unwrap_or(NEG_INFINITY),
            max: max.unwrap_or(INFINITY),
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Bounds {
    /// Create bounds from a min and max value
    ///
    /// # Examples
    ///
    /// ```
    /// use paramtable_rs::table::Bounds;
    ///
    /// let bounds = Bounds::new(0.8, 1.2);
    /// assert_eq!(bounds.min, 0.8);
    /// assert_eq!(bounds.max, 1.2);
    /// ```
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Create an unbounded constraint (negative infinity to positive infinity)
    pub fn unbounded() -> Self {
        Self {
            min: NEG_INFINITY,
            max: INFINITY,
        }
    }

    /// Create a bounds constraint with only a minimum value
    pub fn min_only(min: f64) -> Self {
        Self { min, max: INFINITY }
    }

    /// Create a bounds constraint with only a maximum value
    pub fn max_only(max: f64) -> Self {
        Self {
            min: NEG_INFINITY,
            max,
        }
    }

    /// Check if a value is within the bounds
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// `true` if min is finite
    pub fn has_lower_bound(&self) -> bool {
        self.min.is_finite()
    }

    /// `true` if max is finite
    pub fn has_upper_bound(&self) -> bool {
        self.max.is_finite()
    }

    /// `true` if `min < max`.
    pub fn is_ordered(&self) -> bool {
        self.min < self.max
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

impl From<(Option<f64>, Option<f64>)> for Bounds {
    fn from((min, max): (Option<f64>, Option<f64>)) -> Self {
        Self::new(min.unwrap_or(NEG_INFINITY), max.unwrap_or(INFINITY))
    }
}

fn fmt_limit(limit: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if limit.is_infinite() {
        f.write_str("None")
    } else {
        write!(f, "{:?}", limit)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt_limit(self.min, f)?;
        f.write_str(", ")?;
        fmt_limit(self.max, f)?;
        f.write_str(")")
    }
}

/// Asymmetric `(-, +)` uncertainty on a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorInterval {
    pub minus: f64,
    pub plus: f64,
}

impl ErrorInterval {
    pub fn new(minus: f64, plus: f64) -> Self {
        Self { minus, plus }
    }

    /// Same uncertainty on both sides.
    pub fn symmetric(err: f64) -> Self {
        Self::new(err, err)
    }
}

impl From<(f64, f64)> for ErrorInterval {
    fn from((minus, plus): (f64, f64)) -> Self {
        Self::new(minus, plus)
    }
}

impl fmt::Display for ErrorInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.minus, self.plus)
    }
}
