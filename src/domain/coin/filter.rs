//! Sort options for the coin list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field the server sorts the list by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    /// Percent change over the requested time period.
    Change,
}

impl SortKey {
    pub const ALL: [SortKey; 2] = [SortKey::Price, SortKey::Change];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Change => "change",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price",
            SortKey::Change => "24-hour Performance",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "change" => Ok(SortKey::Change),
            _ => Err(format!("Unknown sort key: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(format!("Unknown sort direction: {}", s)),
        }
    }
}

/// Current sort selection. `None` fields fall back to the server default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub sort_key: Option<SortKey>,
    pub direction: Option<SortDirection>,
}

impl FilterState {
    pub fn new(sort_key: Option<SortKey>, direction: Option<SortDirection>) -> Self {
        Self {
            sort_key,
            direction,
        }
    }

    pub fn is_default(&self) -> bool {
        self.sort_key.is_none() && self.direction.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(SortKey::Price.as_str(), "price");
        assert_eq!(SortKey::Change.as_str(), "change");
        assert_eq!(SortDirection::Ascending.as_str(), "asc");
        assert_eq!(SortDirection::Descending.as_str(), "desc");
    }

    #[test]
    fn test_serde_matches_wire_values() {
        for key in SortKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        for direction in SortDirection::ALL {
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{}\"", direction.as_str()));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("change".parse::<SortKey>().unwrap(), SortKey::Change);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("volume".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_default_filter() {
        assert!(FilterState::default().is_default());
        assert!(!FilterState::new(Some(SortKey::Price), None).is_default());
    }
}
