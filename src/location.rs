use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// A single row or column index.
pub type Coord = usize;
/// A grid extent; grids are never empty in either direction.
pub type Dimension = NonZero<Coord>;

/// A cell position on a grid, in `(row, col)` order.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// The row of this location.
    #[inline]
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column of this location.
    #[inline]
    pub fn col(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Shift this location by `(rows, cols)`.
    ///
    /// Steps past row or column 0 wrap around to very large coordinates, which every grid treats as out of bounds.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
