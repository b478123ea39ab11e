//! Expense category model
//!
//! Categories form a fixed, closed list; an expense always belongs to
//! exactly one of them. The list drives the category breakdown grouping
//! and the `--category` CLI flag.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category from the fixed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Health,
    Other,
}

impl Category {
    /// All categories, in canonical display order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Entertainment,
        Category::Bills,
        Category::Health,
        Category::Other,
    ];

    /// The category name as shown to the user
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => {
                write!(f, "Unknown category: '{}'. Valid categories: ", s)?;
                for (i, c) in Category::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Transport".parse::<Category>().unwrap(), Category::Transport);
        assert_eq!("BILLS".parse::<Category>().unwrap(), Category::Bills);
        assert_eq!(" health ".parse::<Category>().unwrap(), Category::Health);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "groceries".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category: 'groceries'"));
        assert!(err.to_string().contains("Food"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Entertainment.to_string(), "Entertainment");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, r#""transport""#);

        let cat: Category = serde_json::from_str(r#""food""#).unwrap();
        assert_eq!(cat, Category::Food);
    }
}
