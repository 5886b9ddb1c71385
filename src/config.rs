//! Construction-time configuration for containers.
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which end of the order is extracted first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Smallest first ("extract-min").
    #[default]
    Ascending,
    /// Largest first ("extract-max").
    Descending,
}

/// What to do with items that compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Equal items are extracted in the order they were inserted.
    #[default]
    Fifo,
    /// Equal items are extracted in whatever order the container finds convenient.
    ///
    /// The order is still deterministic for a given sequence of operations, but has no promised
    /// relationship to insertion order.
    Arbitrary,
}

/// Failed to parse a [`Direction`] or [`TieBreak`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {what} `{given}` (expected one of: {expected})")]
pub struct ParseConfigError {
    what: &'static str,
    given: String,
    expected: &'static str,
}

impl FromStr for Direction {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" | "asc" | "min" => Ok(Self::Ascending),
            "descending" | "desc" | "max" => Ok(Self::Descending),
            _ => Err(ParseConfigError {
                what: "direction",
                given: s.to_owned(),
                expected: "ascending, descending",
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        })
    }
}

impl FromStr for TieBreak {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(Self::Fifo),
            "arbitrary" => Ok(Self::Arbitrary),
            _ => Err(ParseConfigError {
                what: "tie-break policy",
                given: s.to_owned(),
                expected: "fifo, arbitrary",
            }),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fifo => "fifo",
            Self::Arbitrary => "arbitrary",
        })
    }
}

/// How a container orders its items.
///
/// ```rust
/// # use priority_ordering::*;
/// let config = Config::default().descending().tie_break(TieBreak::Arbitrary);
/// assert_eq!(config.direction, Direction::Descending);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub direction: Direction,
    pub tie_break: TieBreak,
    /// Number of items to reserve space for up front.
    pub capacity: usize,
}

impl Config {
    pub fn ascending(self) -> Self {
        self.direction(Direction::Ascending)
    }

    pub fn descending(self) -> Self {
        self.direction(Direction::Descending)
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
