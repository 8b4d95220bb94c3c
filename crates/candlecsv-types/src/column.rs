//! 1-based CSV column indices.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::ConfigError;

/// A CSV column, numbered from 1 for the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column(NonZeroUsize);

impl Column {
    /// Creates a column from its 1-based number, or `None` for zero.
    #[must_use]
    pub const fn new(number: usize) -> Option<Self> {
        match NonZeroUsize::new(number) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the 1-based column number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.0.get()
    }

    /// Returns the 0-based index into a row.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0.get() - 1
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Column {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ConfigError::InvalidColumn(s.to_string()))
    }
}
