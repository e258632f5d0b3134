use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use petgraph::algo::has_path_connecting;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::cell::CellKind;
use crate::location::{Coord, Location};
use crate::shape::{SquareStep, Step};

/// Reasons placing a trace may fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraceFailure {
    /// A trace was placed on a cell which is not [`Open`](CellKind::Open).
    /// `found` is what occupies that cell, or [`None`] if `location` lies outside the grid.
    ///
    /// The explorer checks every cell before tracing it, so this indicates broken neighbour bookkeeping.
    InvalidPosition {
        /// Where the trace was attempted.
        location: Location,
        /// The cell found there.
        found: Option<CellKind>,
    },
}

impl Display for TraceFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceFailure::InvalidPosition { location, found: Some(cell) } =>
                write!(f, "cannot trace {}: cell contains '{}'", location, cell),
            TraceFailure::InvalidPosition { location, found: None } =>
                write!(f, "cannot trace {}: outside the grid", location),
        }
    }
}

impl Error for TraceFailure {}

/// A rectangular circuit grid with exactly one [`Start`](CellKind::Start) and one [`End`](CellKind::End) cell.
///
/// [`Grid`]s should be built using a [`GridBuilder`](crate::builder::GridBuilder).
/// Once built, a grid never changes; [`place_trace`](Self::place_trace) hands back a new, independent copy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    pub(crate) cells: Array2<CellKind>,
    pub(crate) start: Location,
    pub(crate) end: Location,
}

impl Grid {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> Coord {
        self.cells.nrows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> Coord {
        self.cells.ncols()
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (Coord, Coord) {
        (self.rows(), self.cols())
    }

    /// Location of the start component.
    pub fn start(&self) -> Location {
        self.start
    }

    /// Location of the end component.
    pub fn end(&self) -> Location {
        self.end
    }

    /// The cell at `location`, or [`None`] if it lies outside the grid.
    pub fn cell(&self, location: Location) -> Option<CellKind> {
        self.cells.get(location.as_index()).copied()
    }

    /// Whether `location` is inside the grid and [`Open`](CellKind::Open).
    ///
    /// Start, end, blocked and already traced cells are all closed.
    pub fn is_open(&self, location: Location) -> bool {
        self.cell(location) == Some(CellKind::Open)
    }

    /// Copy this grid with a trace placed at `location`.
    pub fn place_trace(&self, location: Location) -> Result<Grid, TraceFailure> {
        if !self.is_open(location) {
            return Err(TraceFailure::InvalidPosition { location, found: self.cell(location) });
        }

        let mut traced = self.clone();
        traced.cells.index_mut(location.as_index()).assign_elem(CellKind::Trace);
        Ok(traced)
    }

    /// Every traced location, in row-major order.
    pub fn trace(&self) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, cell)| **cell == CellKind::Trace)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// Number of traced cells.
    pub fn trace_len(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == CellKind::Trace).count()
    }

    /// The undirected graph of cells a trace could connect: every open cell and both components, joined to their
    /// orthogonal neighbours.
    ///
    /// The start and end are never joined to each other directly, since a trace must place at least one cell.
    pub fn passable_graph(&self) -> UnGraphMap<Location, ()> {
        let passable = |cell: CellKind| matches!(cell, CellKind::Open | CellKind::Start | CellKind::End);
        let terminals = UnorderedPair::from((self.start, self.end));

        let mut graph = UnGraphMap::with_capacity(
            self.cells.len(),
            // "vertical" edges
            (self.rows() - 1) * self.cols()
                // "horizontal" edges
                + self.rows() * (self.cols() - 1),
        );

        for (index, cell) in self.cells.indexed_iter() {
            if !passable(*cell) {
                continue;
            }

            let location = Location::from(index);
            graph.add_node(location);

            // add edges down and to the right, if possible
            for step in [SquareStep::Down, SquareStep::Right] {
                let other = step.attempt_from(location);
                if self.cell(other).is_some_and(passable) && UnorderedPair::from((location, other)) != terminals {
                    graph.add_edge(location, other, ());
                }
            }
        }

        graph
    }

    /// Whether any trace could connect the start to the end at all.
    pub fn terminals_connected(&self) -> bool {
        has_path_connecting(&self.passable_graph(), self.start, self.end, None)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}
