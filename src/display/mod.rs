//! Human-readable rendering for the crate's value types.
//!
//! Formats are stable; consumers compare these strings in tests:
//! - tuples render as `( v0, v1, …, vn )`;
//! - matrices render one `[ v0 v1 … vn ]` line per row, newline-terminated;
//! - planar vectors render per their [`Notation`], followed by a
//!   `magnitude: <value>` line.

use std::fmt::{self, Display, Formatter};

use crate::matrix::Matrix;
use crate::planar::{Notation, Vector2};
use crate::tuple::Tuple;

impl<T: Display> Display for Tuple<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, " )")
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows() {
            write!(f, "[")?;
            for value in self.row(i) {
                write!(f, " {value}")?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.notation {
            Notation::Column => {
                writeln!(f, "[ {} ]", self.x)?;
                writeln!(f, "[ {} ]", self.y)?;
            }
            Notation::Unit => writeln!(f, "{} i + {} j", self.x, self.y)?,
            Notation::Component => writeln!(f, "(x: {}, y: {})", self.x, self.y)?,
        }
        write!(f, "magnitude: {}", self.magnitude())
    }
}
