use std::collections::VecDeque;

use strum::{Display, EnumString, VariantArray};

/// The pending-state store driving an [`Explorer`](crate::Explorer).
///
/// Implementations decide only the order in which stored items come back out; [`Stack`] and [`Queue`] are built in.
pub trait Worklist<T> {
    /// Store `item`.
    fn push(&mut self, item: T);
    /// Take the next item, or [`None`] once empty.
    fn pop(&mut self) -> Option<T>;
    /// Number of items stored.
    fn len(&self) -> usize;
    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out. Drives a depth-first search.
#[derive(Clone, Debug)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Worklist<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item)
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// First in, first out. Drives a breadth-first search.
#[derive(Clone, Debug)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self(VecDeque::new())
    }
}

impl<T> Worklist<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item)
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Which [`Worklist`] a search should use.
///
/// Parses from `stack`/`dfs` or `queue`/`bfs`, ignoring ASCII case.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumString, VariantArray)]
#[strum(ascii_case_insensitive)]
pub enum Discipline {
    /// Depth-first, through a [`Stack`].
    #[strum(to_string = "stack", serialize = "dfs")]
    Stack,
    /// Breadth-first, through a [`Queue`].
    #[strum(to_string = "queue", serialize = "bfs")]
    Queue,
}
