//! Document model: features, epics and the activity index.
//!
//! The model is built once from a tracking document and only queried
//! afterwards. Epics hold indices into the feature table rather than copies,
//! so every feature has exactly one owner.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LoadError, Result};
use crate::feature::{Feature, RawFeature};
use crate::fields::{Status, StatusClass};

/// Bucket for features that name no epic.
pub const NO_EPIC: &str = "(no epic)";

/// Counts of features per status class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub done: usize,
    pub active: usize,
    pub pending: usize,
    pub total: usize,
}

impl Tally {
    fn add(&mut self, feature: &Feature) {
        self.total += 1;
        match feature.status_class() {
            Some(StatusClass::Done) => self.done += 1,
            Some(StatusClass::Active) => self.active += 1,
            Some(StatusClass::Pending) => self.pending += 1,
            None => {},
        }
    }

    /// Share of done features, 0.0 for an empty tally.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.done as f64 / self.total as f64 * 100.0
        }
    }
}

/// A named group of features.
#[derive(Debug, Clone)]
pub struct Epic {
    pub name: String,
    members: Vec<usize>,
    tally: Tally,
}

impl Epic {
    pub fn done(&self) -> usize {
        self.tally.done
    }

    pub fn active(&self) -> usize {
        self.tally.active
    }

    pub fn pending(&self) -> usize {
        self.tally.pending
    }

    pub fn total(&self) -> usize {
        self.tally.total
    }

    pub fn percent(&self) -> f64 {
        self.tally.percent()
    }
}

/// Read-only projection of a tracking document.
#[derive(Debug, Clone, Default)]
pub struct Model {
    features: Vec<Feature>,
    by_id: HashMap<String, usize>,
    epics: Vec<Epic>,
    epic_index: HashMap<String, usize>,
    activity: BTreeMap<String, Vec<String>>,
    tally: Tally,
}

impl Model {
    /// Load and convert a JSON tracking document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
            _ => LoadError::Read { path: path.to_path_buf(), source },
        })?;

        let raw: Vec<RawFeature> = serde_json::from_str(&text).map_err(|source| {
            LoadError::Parse { path: path.to_path_buf(), source }
        })?;

        let features = raw
            .into_iter()
            .enumerate()
            .map(|(i, r)| Feature::from_raw(r, i).map_err(|m| m.into_load_error(path)))
            .collect::<Result<Vec<_>>>()?;

        let model = Model::from_features(features);
        tracing::info!(
            path = %path.display(),
            features = model.total(),
            epics = model.epics.len(),
            days = model.activity.len(),
            "loaded tracking document"
        );
        Ok(model)
    }

    /// Build the model from typed features in document order.
    ///
    /// A repeated id replaces the earlier feature in its original slot.
    pub fn from_features(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut table: Vec<Feature> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();
        for feature in features {
            match by_id.get(&feature.id) {
                Some(&slot) => {
                    tracing::warn!(id = %feature.id, "duplicate feature id, keeping the later entry");
                    table[slot] = feature;
                },
                None => {
                    by_id.insert(feature.id.clone(), table.len());
                    table.push(feature);
                },
            }
        }

        let mut epics: Vec<Epic> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut activity: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut tally = Tally::default();

        for (i, feature) in table.iter().enumerate() {
            tally.add(feature);

            let name = feature.epic.as_deref().unwrap_or(NO_EPIC);
            let slot = *slots.entry(name.to_string()).or_insert_with(|| {
                epics.push(Epic {
                    name: name.to_string(),
                    members: Vec::new(),
                    tally: Tally::default(),
                });
                epics.len() - 1
            });
            epics[slot].members.push(i);
            epics[slot].tally.add(feature);

            if let Some(created) = &feature.created_at {
                activity.entry(created.clone()).or_default().push(feature.id.clone());
            }
        }

        // Fixed presentation order: most complete first, then by name.
        epics.sort_by(|a, b| {
            b.percent()
                .partial_cmp(&a.percent())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        let epic_index = epics
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();

        Model {
            features: table,
            by_id,
            epics,
            epic_index,
            activity,
            tally,
        }
    }

    /// All features in document order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature(&self, id: &str) -> Option<&Feature> {
        self.by_id.get(id).map(|&i| &self.features[i])
    }

    /// Epics in presentation order.
    pub fn epics(&self) -> &[Epic] {
        &self.epics
    }

    pub fn epic(&self, name: &str) -> Option<&Epic> {
        self.epic_index.get(name).map(|&i| &self.epics[i])
    }

    /// Members of an epic sorted ascending by id.
    pub fn epic_features_by_id(&self, epic: &Epic) -> Vec<&Feature> {
        let mut members: Vec<&Feature> = epic.members.iter().map(|&i| &self.features[i]).collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }

    /// The `n` most recent creation keys, newest first.
    pub fn recent_activity(&self, n: usize) -> Vec<(&str, &[String])> {
        self.activity
            .iter()
            .rev()
            .take(n)
            .map(|(date, ids)| (date.as_str(), ids.as_slice()))
            .collect()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn total(&self) -> usize {
        self.tally.total
    }

    pub fn done(&self) -> usize {
        self.tally.done
    }

    pub fn active(&self) -> usize {
        self.tally.active
    }

    pub fn pending(&self) -> usize {
        self.tally.pending
    }

    /// Number of features carrying exactly this raw status.
    pub fn count_status(&self, status: Status) -> usize {
        self.features.iter().filter(|f| f.status == status).count()
    }

    /// Active and pending features in "what's next" order: active first,
    /// then by priority (absent last), then by creation key (absent last).
    pub fn upcoming(&self) -> Vec<&Feature> {
        let mut upcoming: Vec<&Feature> = self
            .features
            .iter()
            .filter(|f| f.is_active() || f.is_pending())
            .collect();
        upcoming.sort_by(|a, b| upcoming_key(a).cmp(&upcoming_key(b)));
        upcoming
    }

    /// Ids of every feature that lists `id` among its dependencies.
    pub fn unlocks(&self, id: &str) -> Vec<&str> {
        self.features
            .iter()
            .filter(|f| f.depends_on.iter().any(|d| d == id))
            .map(|f| f.id.as_str())
            .collect()
    }
}

fn upcoming_key(f: &Feature) -> (u8, u16, &str) {
    (
        if f.is_active() { 0 } else { 1 },
        f.priority.map_or(999, |p| p.rank() as u16),
        f.created_at.as_deref().unwrap_or("9999"),
    )
}
