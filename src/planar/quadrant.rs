use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Classification of a planar point against the thresholds (0, 0) and (1, 1).
///
/// The region bounds overlap at x = 1 and y = 1; classification is
/// first-match-wins in declaration order. Small-magnitude points therefore
/// land in [`Quadrant::Third`]: `of(0.5, 0.5)` is `Third`, not `First`.
///
/// Stateless; recomputed from the coordinates on every query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    /// Exactly (0, 0).
    Origin,
    /// x ≥ 1 and y ≥ 1.
    First,
    /// x ≤ 1 and y ≥ 1.
    Second,
    /// x ≤ 1 and y ≤ 1.
    Third,
    /// Everything else.
    Fourth,
}

impl Quadrant {
    /// Classify `(x, y)`; the first matching region wins.
    pub fn of(x: f64, y: f64) -> Self {
        if x.is_zero() && y.is_zero() {
            Quadrant::Origin
        } else if x >= 1.0 && y >= 1.0 {
            Quadrant::First
        } else if x <= 1.0 && y >= 1.0 {
            Quadrant::Second
        } else if x <= 1.0 && y <= 1.0 {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }
}
