//! Feature record and its conversion from the on-disk shape.
//!
//! Documents are arrays of loosely shaped objects. `RawFeature` mirrors that
//! shape one to one; `Feature` is the strongly typed record the rest of the
//! program works with. Conversion happens once, at load time.

use serde::{Deserialize, Deserializer};

use crate::error::LoadError;
use crate::fields::*;

/// Longest description prefix used as a fallback title.
const TITLE_FROM_DESCRIPTION: usize = 60;

/// A feature object exactly as it appears in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeature {
    pub id: Option<String>,
    /// Absent means pending; an explicit `null` is an unknown status.
    #[serde(default, deserialize_with = "nullable_status")]
    pub status: Option<Status>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub epic: Option<String>,
    #[serde(default)]
    pub depends_on: Option<Vec<String>>,
    pub priority: Option<RawPriority>,
    pub created_at: Option<String>,
    pub spec_file: Option<String>,
    #[serde(default)]
    pub steps: Option<Vec<String>>,
    pub discovered_from: Option<String>,
    pub notes: Option<String>,
}

fn nullable_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Status>, D::Error> {
    Ok(Some(Option::<Status>::deserialize(deserializer)?.unwrap_or(Status::Unknown)))
}

/// A single trackable unit of work.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub status: Status,
    pub title: String,
    pub description: Option<String>,
    pub epic: Option<String>,
    pub depends_on: Vec<String>,
    pub priority: Option<Priority>,
    pub created_at: Option<String>,
    pub spec_file: Option<String>,
    pub steps: Vec<String>,
    pub discovered_from: Option<String>,
    pub notes: Option<String>,
}

impl Feature {
    /// Minimal feature with the given id and status; everything else absent.
    pub fn new(id: &str, status: Status) -> Self {
        Feature {
            id: id.to_string(),
            status,
            title: id.to_string(),
            description: None,
            epic: None,
            depends_on: Vec::new(),
            priority: None,
            created_at: None,
            spec_file: None,
            steps: Vec::new(),
            discovered_from: None,
            notes: None,
        }
    }

    /// Convert the `index`-th document entry into a typed feature.
    pub fn from_raw(raw: RawFeature, index: usize) -> Result<Self, MissingField> {
        let id = raw.id.ok_or(MissingField { field: "id", index })?;
        let title = resolve_title(
            raw.title.as_deref(),
            raw.name.as_deref(),
            raw.description.as_deref(),
            &id,
        );

        Ok(Feature {
            title,
            status: raw.status.unwrap_or_default(),
            description: raw.description.filter(|d| !d.is_empty()),
            epic: raw.epic.filter(|e| !e.is_empty()),
            depends_on: raw.depends_on.unwrap_or_default(),
            priority: resolve_priority(raw.priority),
            created_at: raw.created_at.filter(|c| !c.is_empty()),
            spec_file: raw.spec_file.filter(|s| !s.is_empty()),
            steps: raw.steps.unwrap_or_default(),
            discovered_from: raw.discovered_from.filter(|d| !d.is_empty()),
            notes: raw.notes.filter(|n| !n.is_empty()),
            id,
        })
    }

    pub fn status_class(&self) -> Option<StatusClass> {
        self.status.class()
    }

    pub fn is_done(&self) -> bool {
        self.status_class() == Some(StatusClass::Done)
    }

    pub fn is_active(&self) -> bool {
        self.status_class() == Some(StatusClass::Active)
    }

    pub fn is_pending(&self) -> bool {
        self.status_class() == Some(StatusClass::Pending)
    }
}

/// A required field absent from one document entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingField {
    pub field: &'static str,
    pub index: usize,
}

impl MissingField {
    pub fn into_load_error(self, path: &std::path::Path) -> LoadError {
        LoadError::MissingField {
            path: path.to_path_buf(),
            field: self.field,
            index: self.index,
        }
    }
}

/// Pick a display title: the first non-empty of title, name, the start of
/// the description, and finally the id.
pub fn resolve_title(
    title: Option<&str>,
    name: Option<&str>,
    description: Option<&str>,
    id: &str,
) -> String {
    let description_prefix = description
        .map(|d| d.chars().take(TITLE_FROM_DESCRIPTION).collect::<String>());

    let resolved = [title, name, description_prefix.as_deref()]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(id)
        .to_string();
    resolved
}
