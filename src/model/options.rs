use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, GraphResult};

/// Label of the sentinel group that selects everyone.
pub const ALL_GROUPS_LABEL: &str = "全部";

fn invalid(kind: &str, value: &str) -> GraphError {
    GraphError::InvalidOption {
        kind: kind.to_string(),
        value: value.to_string(),
    }
}

/// Which attribute the group selector partitions the roster by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// Free-form labels stored in each record's `groups`.
    #[default]
    Custom,
    /// The fixed gender enumeration.
    Demographic,
}

impl FromStr for Dimension {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "custom" => Ok(Dimension::Custom),
            "demographic" | "gender" => Ok(Dimension::Demographic),
            other => Err(invalid("dimension", other)),
        }
    }
}

/// A selectable entry of the group selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Label(String),
}

impl GroupFilter {
    /// Parses user input; empty input or the sentinel label selects everyone.
    /// Any other text, "all" included, is a literal group label.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == ALL_GROUPS_LABEL {
            GroupFilter::All
        } else {
            GroupFilter::Label(trimmed.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GroupFilter::All => ALL_GROUPS_LABEL,
            GroupFilter::Label(l) => l,
        }
    }
}

impl Serialize for GroupFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Secondary ordering applied after the pinned-first rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    MostRecent,
    AgeAscending,
    AgeDescending,
}

impl FromStr for SortKey {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "recent" | "most-recent" => Ok(SortKey::MostRecent),
            "age-asc" | "ageasc" => Ok(SortKey::AgeAscending),
            "age-desc" | "agedesc" => Ok(SortKey::AgeDescending),
            other => Err(invalid("sort key", other)),
        }
    }
}

/// Granularity of the personality distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistributionMode {
    /// The four temperament groups.
    #[default]
    Coarse,
    /// The sixteen individual types.
    Fine,
}

impl FromStr for DistributionMode {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "group" | "coarse" => Ok(DistributionMode::Coarse),
            "type" | "fine" => Ok(DistributionMode::Fine),
            other => Err(invalid("distribution mode", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocationLevel {
    #[default]
    Province,
    City,
}

impl FromStr for LocationLevel {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "province" => Ok(LocationLevel::Province),
            "city" => Ok(LocationLevel::City),
            other => Err(invalid("location level", other)),
        }
    }
}
