//! View and sort selection types
//!
//! These are caller-owned UI state: the store itself has no notion of the
//! active view or sort direction.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Filter granularity selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Only records dated today
    Daily,
    /// Records in a month/year pair
    Monthly,
    /// Records in a year
    Yearly,
    /// No filtering
    #[default]
    All,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Axis to sort a view by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortAxis {
    /// Numeric comparison on the amount field
    Amount,
    /// Chronological comparison on the date field
    Date,
}

impl fmt::Display for SortAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount => write!(f, "amount"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// Sort direction with toggle semantics
///
/// A caller holding a direction per axis can flip it on each invocation,
/// so repeated sorts alternate ascending/descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Flip this direction in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Arrow glyph for display (matches the sort-button labelling)
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}
