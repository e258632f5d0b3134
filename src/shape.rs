//! Steps between neighbouring grid cells.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A single step between neighbouring cells.
///
/// [`SquareStep`] is the built-in implementation. The order of [`VariantArray::VARIANTS`] is the order in which
/// neighbours are visited everywhere in this crate, so it must stay fixed for searches to be reproducible.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie outside any grid; callers bounds-check it.
    fn attempt_from(&self, location: Location) -> Location;
}

/// Orthogonal steps on a rectangular grid.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation for every step type.
pub trait Neighborhood: Step {
    /// Get all neighbours of a [`Location`] in "theory", by attempting every step direction in `Self::VARIANTS`.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b`, or [`None`] if the two are not neighbours.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
    /// Whether `a` and `b` are neighbours.
    fn adjacent(a: Location, b: Location) -> bool {
        Self::direction_to(a, b).is_some()
    }
}

impl<S> Neighborhood for S
where
    S: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
