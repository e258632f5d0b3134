#![warn(missing_docs)]

//! # `circuit-tracer`
//!
//! Finds every shortest trace connecting two components on a circuit grid.
//! Begin by building a grid with a [`GridBuilder`], then hand it to an [`Explorer`] (or [`explore`]) along with a
//! worklist; the search yields [`Solutions`], every minimum-length [`PathState`] it found.
//!
//! A grid holds open cells (`O`), blocked cells (`X`), one start (`1`) and one end (`2`).
//! A trace (`T`) starts next to the start, steps orthogonally through open cells without crossing itself, and is
//! complete as soon as it touches the end.
//!
//! # Internals
//! Every partial trace is a [`PathState`] owning its own copy of the grid, so branching never needs to undo anything.
//! The search is exhaustive: it expands every partial trace it ever creates and keeps only the shortest complete
//! ones. The [`Worklist`] therefore changes only exploration order; a [`Stack`] explores depth-first and a [`Queue`]
//! breadth-first, and both end with the same traces.
//!
//! Progress is reported through the [`log`] facade; install any logger to see it.

pub use builder::{BuilderInvalidReason, GridBuilder};
pub use cell::{CellKind, CellKindInvalid};
pub use explorer::{explore, Explorer, SearchStats, Solutions};
pub use grid::{Grid, TraceFailure};
pub use location::{Coord, Dimension, Location};
pub use state::PathState;
pub use worklist::{Discipline, Queue, Stack, Worklist};

pub mod builder;
pub(crate) mod cell;
pub(crate) mod explorer;
pub(crate) mod grid;
pub(crate) mod location;
pub mod shape;
pub(crate) mod state;
pub(crate) mod worklist;
