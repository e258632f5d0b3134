//! Validated construction of [`Grid`]s.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::cell::CellKind;
use crate::grid::Grid;
use crate::location::{Coord, Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A feature like a terminal or a blocked cell was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
    /// A row given to [`GridBuilder::row`] did not have one cell per column.
    RowLengthMismatch {
        /// Index of the offending row.
        row: Coord,
        /// Number of columns on the grid.
        expected: Coord,
        /// Number of cells found in the row.
        found: Coord,
    },
    /// A row given to [`GridBuilder::row`] contained a character naming no cell.
    InvalidCell(char),
    /// A row given to [`GridBuilder::row`] contained a trace; only searches place traces.
    TraceInInput,
    /// The start and end were placed on the same cell.
    TerminalsOverlap,
    /// No start was placed, or it was removed again.
    MissingStart,
    /// No end was placed, or it was removed again.
    MissingEnd,
    /// A row given to [`GridBuilder::row`] contained a `1` while an earlier row already placed the start.
    DuplicateStart,
    /// A row given to [`GridBuilder::row`] contained a `2` while an earlier row already placed the end.
    DuplicateEnd,
}

impl Display for BuilderInvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderInvalidReason::FeatureOutOfBounds => write!(f, "feature placed outside the grid"),
            BuilderInvalidReason::RowLengthMismatch { row, expected, found } =>
                write!(f, "row {} has {} cells, expected {}", row, found, expected),
            BuilderInvalidReason::InvalidCell(c) => write!(f, "invalid cell character '{}'", c),
            BuilderInvalidReason::TraceInInput => write!(f, "trace cells are not allowed in input"),
            BuilderInvalidReason::TerminalsOverlap => write!(f, "start and end share a cell"),
            BuilderInvalidReason::MissingStart => write!(f, "no start component"),
            BuilderInvalidReason::MissingEnd => write!(f, "no end component"),
            BuilderInvalidReason::DuplicateStart => write!(f, "more than one start component"),
            BuilderInvalidReason::DuplicateEnd => write!(f, "more than one end component"),
        }
    }
}

impl Error for BuilderInvalidReason {}

/// A builder for [`Grid`]s.
///
/// Every cell starts [`Open`](CellKind::Open). Builders mutate themselves while building but can be [`Clone`]d to save
/// their state at some point. Once a builder becomes invalid it ignores any further edits and [`build`](Self::build)
/// reports why.
#[derive(Clone, Debug)]
pub struct GridBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    cells: Array2<CellKind>,
    start: Option<Location>,
    end: Option<Location>,
    // whether the current terminals came from `row`
    start_from_row: bool,
    end_from_row: bool,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl GridBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.0.get(), dims.1.get()), CellKind::Open),
            start: None,
            end: None,
            start_from_row: false,
            end_from_row: false,
            invalid_reasons: Default::default(),
        }
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    /// Check bounds and validity before an edit; `false` means the edit must be skipped.
    fn accepts(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return false;
        }

        true
    }

    fn set(&mut self, location: Location, cell: CellKind) {
        // overwriting a terminal removes it
        if self.start == Some(location) {
            self.start = None;
        }
        if self.end == Some(location) {
            self.end = None;
        }

        self.cells.index_mut(location.as_index()).assign_elem(cell);
    }

    /// Place the start component at `location`, moving it if one was already placed.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state
    /// if `location` is out of bounds, or a [`TerminalsOverlap`](BuilderInvalidReason::TerminalsOverlap) invalid state if
    /// the end is already there.
    pub fn start(&mut self, location: Location) -> &mut Self {
        if !self.accepts(location) {
            return self;
        }

        if self.end == Some(location) {
            self.invalid_reasons.push(BuilderInvalidReason::TerminalsOverlap);
            return self;
        }

        if let Some(previous) = self.start {
            self.set(previous, CellKind::Open);
        }
        self.set(location, CellKind::Start);
        self.start = Some(location);

        self
    }

    /// Place the end component at `location`, moving it if one was already placed.
    ///
    /// Fails the same ways as [`start`](Self::start).
    pub fn end(&mut self, location: Location) -> &mut Self {
        if !self.accepts(location) {
            return self;
        }

        if self.start == Some(location) {
            self.invalid_reasons.push(BuilderInvalidReason::TerminalsOverlap);
            return self;
        }

        if let Some(previous) = self.end {
            self.set(previous, CellKind::Open);
        }
        self.set(location, CellKind::End);
        self.end = Some(location);

        self
    }

    /// Block the cell at `location`. A terminal here is removed, which will keep the builder from building until a
    /// new one is placed.
    pub fn block(&mut self, location: Location) -> &mut Self {
        if self.accepts(location) {
            self.set(location, CellKind::Blocked);
        }

        self
    }

    /// Shorthand for multiple calls to [`Self::block`], with the same conditions.
    pub fn block_all(&mut self, locations: impl IntoIterator<Item = Location>) -> &mut Self {
        for location in locations {
            self.block(location);
        }

        self
    }

    /// Reopen the cell at `location`, removing anything placed there.
    pub fn open(&mut self, location: Location) -> &mut Self {
        if self.accepts(location) {
            self.set(location, CellKind::Open);
        }

        self
    }

    /// Fill row `index` from cell characters (`O`, `X`, `1`, `2`), one per column; whitespace is ignored.
    ///
    /// `1` and `2` go through [`start`](Self::start) and [`end`](Self::end). Rows describe the whole grid, so a second
    /// `1` or `2` across rows makes the builder enter a [`DuplicateStart`](BuilderInvalidReason::DuplicateStart) or
    /// [`DuplicateEnd`](BuilderInvalidReason::DuplicateEnd) invalid state instead of moving the terminal.
    pub fn row(&mut self, index: Coord, text: &str) -> &mut Self {
        if !self.accepts(Location(index, 0)) {
            return self;
        }

        let chars = text.chars().filter(|c| !c.is_whitespace()).collect_vec();
        if chars.len() != self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::RowLengthMismatch {
                row: index,
                expected: self.dims.1.get(),
                found: chars.len(),
            });
            return self;
        }

        let cells = match chars.into_iter().map(CellKind::try_from).collect::<Result<Vec<_>, _>>() {
            Ok(cells) => cells,
            Err(invalid) => {
                self.invalid_reasons.push(BuilderInvalidReason::InvalidCell(invalid.0));
                return self;
            }
        };

        if cells.contains(&CellKind::Trace) {
            self.invalid_reasons.push(BuilderInvalidReason::TraceInInput);
            return self;
        }

        for (col, cell) in cells.into_iter().enumerate() {
            let location = Location(index, col);
            match cell {
                CellKind::Open => self.open(location),
                CellKind::Blocked => self.block(location),
                CellKind::Start => {
                    if self.start_from_row && self.start.is_some() {
                        self.invalid_reasons.push(BuilderInvalidReason::DuplicateStart);
                        return self;
                    }
                    self.start_from_row = true;
                    self.start(location)
                }
                CellKind::End => {
                    if self.end_from_row && self.end.is_some() {
                        self.invalid_reasons.push(BuilderInvalidReason::DuplicateEnd);
                        return self;
                    }
                    self.end_from_row = true;
                    self.end(location)
                }
                CellKind::Trace => unreachable!(),
            };
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    /// Missing terminals are only detected by [`build`](Self::build).
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Grid`].
    /// If the builder is invalid for any reason, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    ///
    /// Building leaves the builder untouched, so a missing terminal can still be placed afterwards.
    pub fn build(&self) -> Result<Grid, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Grid {
                cells: self.cells.clone(),
                start,
                end,
            }),
            (start, end) => {
                let mut missing = Vec::with_capacity(2);
                if start.is_none() {
                    missing.push(BuilderInvalidReason::MissingStart);
                }
                if end.is_none() {
                    missing.push(BuilderInvalidReason::MissingEnd);
                }
                Err(missing)
            }
        }
    }
}
