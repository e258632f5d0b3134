use std::error::Error;
use std::fmt::{Display, Formatter};

/// The contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum CellKind {
    /// Free for a trace to pass through.
    #[default]
    Open,
    /// Never part of a trace.
    Blocked,
    /// The component a trace leaves from.
    Start,
    /// The component a trace must reach. Never marked as trace itself.
    End,
    /// Part of a candidate trace.
    Trace,
}

impl CellKind {
    /// The character this cell renders as.
    pub fn as_char(&self) -> char {
        match self {
            CellKind::Open => 'O',
            CellKind::Blocked => 'X',
            CellKind::Start => '1',
            CellKind::End => '2',
            CellKind::Trace => 'T',
        }
    }
}

impl Display for CellKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A character which names no [`CellKind`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellKindInvalid(pub char);

impl Display for CellKindInvalid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid cell character '{}', expected one of O X 1 2 T", self.0)
    }
}

impl Error for CellKindInvalid {}

impl TryFrom<char> for CellKind {
    type Error = CellKindInvalid;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            'O' => CellKind::Open,
            'X' => CellKind::Blocked,
            '1' => CellKind::Start,
            '2' => CellKind::End,
            'T' => CellKind::Trace,
            other => return Err(CellKindInvalid(other)),
        })
    }
}
