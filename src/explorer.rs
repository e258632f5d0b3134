use std::any::type_name;
use std::slice::Iter;
use std::vec::IntoIter;

use log::{debug, trace};

use crate::grid::{Grid, TraceFailure};
use crate::shape::{Neighborhood, SquareStep};
use crate::state::PathState;
use crate::worklist::{Discipline, Queue, Stack, Worklist};

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchStats {
    /// States taken off the worklist.
    pub popped: usize,
    /// States put on the worklist, seeds included.
    pub pushed: usize,
    /// Most states held by the worklist at once.
    pub peak_worklist: usize,
}

/// Every shortest trace a finished search found, in the order they were found.
///
/// Empty means no trace connects the two components.
#[derive(Clone, Debug)]
pub struct Solutions {
    paths: Vec<PathState>,
    stats: SearchStats,
}

impl Solutions {
    /// The shortest traces.
    pub fn paths(&self) -> &[PathState] {
        &self.paths
    }

    /// Iterate over the shortest traces.
    pub fn iter(&self) -> Iter<'_, PathState> {
        self.paths.iter()
    }

    /// How many shortest traces were found.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no trace exists.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Length shared by every trace found, or [`None`] if there are none.
    pub fn shortest_length(&self) -> Option<usize> {
        self.paths.first().map(PathState::path_length)
    }

    /// Counters from the search which produced these.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Take the traces, dropping the counters.
    pub fn into_paths(self) -> Vec<PathState> {
        self.paths
    }
}

impl IntoIterator for Solutions {
    type Item = PathState;
    type IntoIter = IntoIter<PathState>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a Solutions {
    type Item = &'a PathState;
    type IntoIter = Iter<'a, PathState>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Exhaustive search for every shortest trace on a grid.
///
/// The worklist `W` only decides the order in which partial traces are expanded. Every state pushed is eventually
/// popped and nothing is pruned, so a [`Stack`] and a [`Queue`] find the same traces, just in a different order.
///
/// # Procedure
/// 1. Each open neighbour of the start becomes a one-cell [`PathState`] on the worklist.
/// 2. Until the worklist runs dry, pop a state.
///    If its frontier touches the end it is a solution: strictly shorter than the best so far replaces them all,
///    equally short joins them, longer is dropped.
///    Otherwise every open neighbour of the frontier extends it into a new state, visited up, down, left, right.
/// 3. The best states left at the end are the answer.
pub struct Explorer<W>
where
    W: Worklist<PathState>,
{
    grid: Grid,
    worklist: W,
    best: Vec<PathState>,
    stats: SearchStats,
}

impl<W> Explorer<W>
where
    W: Worklist<PathState>,
{
    /// Prepare a search over `grid`, storing pending states in `worklist`.
    pub fn new(grid: Grid, worklist: W) -> Self {
        Self {
            grid,
            worklist,
            best: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    fn store(&mut self, state: PathState) {
        self.worklist.push(state);
        self.stats.pushed += 1;
        self.stats.peak_worklist = self.stats.peak_worklist.max(self.worklist.len());
    }

    fn record(&mut self, state: PathState) {
        match self.best.first().map(PathState::path_length) {
            Some(best) if state.path_length() > best => {}
            Some(best) if state.path_length() == best => {
                trace!("another trace of length {} ending at {}", best, state.frontier());
                self.best.push(state);
            }
            _ => {
                debug!("new shortest trace of length {}", state.path_length());
                self.best.clear();
                self.best.push(state);
            }
        }
    }

    fn expand(&mut self, state: &PathState) -> Result<(), TraceFailure> {
        for (_, neighbor) in SquareStep::neighbors_of(state.frontier()) {
            if state.is_open(neighbor) {
                let next = PathState::from_parent(state, neighbor)?;
                self.store(next);
            }
        }

        Ok(())
    }

    /// Run the search to completion, consuming the explorer.
    ///
    /// Returns [`Err`] only if a trace was placed on a closed cell, which means neighbour bookkeeping is broken; the
    /// whole search is abandoned and no partial result is kept.
    pub fn search(mut self) -> Result<Solutions, TraceFailure> {
        debug!(
            "searching {}x{} grid from {} to {} using {}",
            self.grid.rows(), self.grid.cols(), self.grid.start(), self.grid.end(), type_name::<W>()
        );

        if !self.grid.terminals_connected() {
            debug!("no open route between {} and {}", self.grid.start(), self.grid.end());
            return Ok(Solutions { paths: self.best, stats: self.stats });
        }

        for (_, neighbor) in SquareStep::neighbors_of(self.grid.start()) {
            if self.grid.is_open(neighbor) {
                let seed = PathState::from_terminal(&self.grid, neighbor)?;
                self.store(seed);
            }
        }
        debug!("seeded {} states", self.stats.pushed);

        while let Some(state) = self.worklist.pop() {
            self.stats.popped += 1;

            if state.is_solution() {
                self.record(state);
            } else {
                self.expand(&state)?;
            }
        }

        debug!("search finished with {} shortest traces, {:?}", self.best.len(), self.stats);
        Ok(Solutions { paths: self.best, stats: self.stats })
    }
}

/// Search `grid` with the worklist `discipline` names.
pub fn explore(grid: Grid, discipline: Discipline) -> Result<Solutions, TraceFailure> {
    match discipline {
        Discipline::Stack => Explorer::new(grid, Stack::default()).search(),
        Discipline::Queue => Explorer::new(grid, Queue::default()).search(),
    }
}
