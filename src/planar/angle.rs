use serde::{Deserialize, Serialize};

/// One angular value held in both degree and radian form.
///
/// Both fields are derived at construction from whichever unit was
/// supplied (degrees = radians · 180/π), so the two representations can
/// never drift. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    degrees: f64,
    radians: f64,
}

impl Angle {
    /// Angle from a value in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            radians: degrees.to_radians(),
        }
    }

    /// Angle from a value in radians.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: radians.to_degrees(),
            radians,
        }
    }

    /// The value in degrees.
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The value in radians.
    pub fn radians(&self) -> f64 {
        self.radians
    }
}
