use std::fmt::{Display, Formatter};

use crate::grid::{Grid, TraceFailure};
use crate::location::Location;
use crate::shape::{Neighborhood, SquareStep};

/// One partial trace: a private copy of the grid with this trace burned in, plus the cell it most recently reached.
///
/// A [`PathState`] never changes after construction and keeps no link to the state it grew from, so the explorer can
/// drop or revisit states in any order without undoing anything.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathState {
    grid: Grid,
    frontier: Location,
    length: usize,
}

impl PathState {
    /// Start a trace at `location`, which must be open on `grid` (normally a neighbour of the start).
    pub fn from_terminal(grid: &Grid, location: Location) -> Result<Self, TraceFailure> {
        Ok(Self {
            grid: grid.place_trace(location)?,
            frontier: location,
            length: 1,
        })
    }

    /// Extend `parent` by one cell at `location`, which must be open on the parent's grid.
    pub fn from_parent(parent: &PathState, location: Location) -> Result<Self, TraceFailure> {
        Ok(Self {
            grid: parent.grid.place_trace(location)?,
            frontier: location,
            length: parent.length + 1,
        })
    }

    /// Whether `location` is open on this state's grid.
    pub fn is_open(&self, location: Location) -> bool {
        self.grid.is_open(location)
    }

    /// Whether the frontier touches the end; the end itself is never traced.
    pub fn is_solution(&self) -> bool {
        SquareStep::adjacent(self.frontier, self.grid.end())
    }

    /// Number of trace cells placed.
    pub fn path_length(&self) -> usize {
        self.length
    }

    /// The most recently traced cell.
    pub fn frontier(&self) -> Location {
        self.frontier
    }

    /// This state's grid, trace included.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Traced locations, in row-major order rather than path order.
    pub fn trace(&self) -> Vec<Location> {
        self.grid.trace()
    }
}

impl Display for PathState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}
