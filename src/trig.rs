//! Trigonometric helpers that take the angle unit explicitly.
//!
//! Forward functions interpret their argument in the given unit; inverse
//! functions return their result in it. Out-of-domain inputs are not
//! checked: they come back as NaN or infinity exactly as `f64` produces them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Converts an angle expressed in `self` to radians.
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Degrees => deg_to_rad(angle),
            AngleUnit::Radians => angle,
        }
    }

    /// Expresses an angle given in radians in `self`.
    pub fn from_radians(self, rad: f64) -> f64 {
        match self {
            AngleUnit::Degrees => rad_to_deg(rad),
            AngleUnit::Radians => rad,
        }
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn sin(x: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(x).sin()
}

pub fn cos(x: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(x).cos()
}

/// Unbounded near odd multiples of a right angle.
pub fn tan(x: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(x).tan()
}

pub fn sec(x: f64, unit: AngleUnit) -> f64 {
    1.0 / cos(x, unit)
}

pub fn csc(x: f64, unit: AngleUnit) -> f64 {
    1.0 / sin(x, unit)
}

pub fn cot(x: f64, unit: AngleUnit) -> f64 {
    1.0 / tan(x, unit)
}

/// NaN outside [-1, 1].
pub fn arcsin(x: f64, unit: AngleUnit) -> f64 {
    unit.from_radians(x.asin())
}

/// NaN outside [-1, 1].
pub fn arccos(x: f64, unit: AngleUnit) -> f64 {
    unit.from_radians(x.acos())
}

pub fn arctan(x: f64, unit: AngleUnit) -> f64 {
    unit.from_radians(x.atan())
}

// The reciprocal inverses go through 1/x, so x == 0 yields an infinite
// intermediate and whatever the base inverse makes of it.

pub fn arccot(x: f64, unit: AngleUnit) -> f64 {
    arctan(1.0 / x, unit)
}

pub fn arcsec(x: f64, unit: AngleUnit) -> f64 {
    arccos(1.0 / x, unit)
}

pub fn arccsc(x: f64, unit: AngleUnit) -> f64 {
    arcsin(1.0 / x, unit)
}
