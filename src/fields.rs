//! Enumerations and field types for feature tracking documents.
//!
//! This module defines the closed status vocabulary, the coarse status classes
//! used for aggregate counts, and the priority levels together with the
//! resolver that normalises the loose on-disk priority representation.

use serde::Deserialize;

/// Feature status as written in the tracking document.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Done,
    Complete,
    InProgress,
    #[default]
    Pending,
    Abandoned,
    Superseded,
    /// Any status string outside the known vocabulary.
    #[serde(other)]
    Unknown,
}

/// Coarse bucket several raw statuses fall into for progress counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Done,
    Active,
    Pending,
}

impl Status {
    /// The status class this status counts towards, if any.
    pub fn class(self) -> Option<StatusClass> {
        match self {
            Status::Done | Status::Complete => Some(StatusClass::Done),
            Status::InProgress => Some(StatusClass::Active),
            Status::Pending => Some(StatusClass::Pending),
            Status::Abandoned | Status::Superseded | Status::Unknown => None,
        }
    }

    /// Wire spelling of the status.
    pub fn label(self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::Complete => "complete",
            Status::InProgress => "in_progress",
            Status::Pending => "pending",
            Status::Abandoned => "abandoned",
            Status::Superseded => "superseded",
            Status::Unknown => "unknown",
        }
    }
}

/// Normalised priority, 0 = critical through 3 = low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Priority {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    fn from_rank(rank: i64) -> Option<Self> {
        match rank {
            0 => Some(Priority::Critical),
            1 => Some(Priority::High),
            2 => Some(Priority::Medium),
            3 => Some(Priority::Low),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "critical" => Some(Priority::Critical),
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Priority exactly as it appears in the document: a number or a name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawPriority {
    Number(i64),
    Text(String),
    /// Floats, booleans and other shapes; always resolve to absent.
    Other(serde_json::Value),
}

/// Resolve a raw priority into a canonical level.
///
/// Numbers outside 0..=3, unknown names and any other JSON shape resolve
/// to `None` rather than failing the load.
pub fn resolve_priority(raw: Option<RawPriority>) -> Option<Priority> {
    match raw? {
        RawPriority::Number(n) => Priority::from_rank(n),
        RawPriority::Text(s) => Priority::from_name(&s),
        RawPriority::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classes() {
        assert_eq!(Status::Done.class(), Some(StatusClass::Done));
        assert_eq!(Status::Complete.class(), Some(StatusClass::Done));
        assert_eq!(Status::InProgress.class(), Some(StatusClass::Active));
        assert_eq!(Status::Pending.class(), Some(StatusClass::Pending));
        assert_eq!(Status::Abandoned.class(), None);
        assert_eq!(Status::Superseded.class(), None);
        assert_eq!(Status::Unknown.class(), None);
    }

    #[test]
    fn test_status_deserialize_unknown_falls_back() {
        let s: Status = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(s, Status::InProgress);
        let s: Status = serde_json::from_str("\"blocked\"").unwrap();
        assert_eq!(s, Status::Unknown);
    }

    #[test]
    fn test_resolve_priority() {
        let p = |v: &str| resolve_priority(Some(serde_json::from_str(v).unwrap()));
        assert_eq!(p("0"), Some(Priority::Critical));
        assert_eq!(p("3"), Some(Priority::Low));
        assert_eq!(p("7"), None);
        assert_eq!(p("-1"), None);
        assert_eq!(p("\"High\""), Some(Priority::High));
        assert_eq!(p("\"medium\""), Some(Priority::Medium));
        assert_eq!(p("\"urgent\""), None);
        assert_eq!(p("1.5"), None);
        assert_eq!(resolve_priority(None), None);
    }
}
