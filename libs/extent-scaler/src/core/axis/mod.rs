//! Axis selection for the driving axis and the per-axis constrain flags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::vec3::Vec3;
use crate::error::ScalerError;

/// One of the three cartesian axes.
///
/// Serialized with the lowercase names used by the editor dialog
/// (`"x"`, `"y"`, `"z"`).
///
/// # Examples
/// ```
/// use extent_scaler::{Axis, Vec3};
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.get(v), 2.0);
/// assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The X axis.
    #[default]
    X,
    /// The Y axis.
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis (`0`, `1` or `2`).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Reads this axis' component of `v`.
    pub fn get(self, v: Vec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Overwrites this axis' component of `v`.
    ///
    /// # Examples
    /// ```
    /// use extent_scaler::{Axis, Vec3};
    /// let mut v = Vec3::ONE;
    /// Axis::Z.set(&mut v, 5.0);
    /// assert_eq!(v, Vec3::new(1.0, 1.0, 5.0));
    /// ```
    pub fn set(self, v: &mut Vec3, value: f64) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }

    /// Lowercase axis name.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = ScalerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ScalerError::InvalidAxis(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
