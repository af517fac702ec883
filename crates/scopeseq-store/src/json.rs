//! Catalog store backed by a static JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use scopeseq_common::catalog::SubjectEntry;
use scopeseq_common::subjects::{find_subject, SubjectMeta, SUBJECTS};
use scopeseq_common::SubjectData;
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::store::CatalogStore;

/// Raw catalog document: subject id → curriculum content.
type RawCatalog = BTreeMap<String, SubjectEntry>;

/// In-memory catalog loaded once from JSON. Cloning is cheap and shares the data.
#[derive(Clone, Debug)]
pub struct JsonCatalogStore {
    catalog: Arc<RawCatalog>,
}

impl JsonCatalogStore {
    /// Parse a catalog document held in memory.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: RawCatalog = serde_json::from_str(content)?;
        Ok(Self { catalog: Arc::new(catalog) })
    }

    /// Load the catalog from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&content)?;
        info!(
            path = %path.display(),
            subjects = store.catalog.len(),
            "Curriculum catalog loaded"
        );
        Ok(store)
    }

    /// Load from the first candidate that exists: `explicit` if given, then
    /// each of `search_paths` in order.
    pub fn discover<P: AsRef<Path>>(explicit: Option<&Path>, search_paths: &[P]) -> Result<Self> {
        let candidates: Vec<PathBuf> = explicit
            .map(Path::to_path_buf)
            .into_iter()
            .chain(search_paths.iter().map(|p| p.as_ref().to_path_buf()))
            .collect();

        for candidate in &candidates {
            if candidate.exists() {
                return Self::from_path(candidate);
            }
            debug!(path = %candidate.display(), "Catalog candidate missing");
        }

        Err(StoreError::NotFound { tried: candidates })
    }

    /// Number of subject entries in the raw catalog, registered or not.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn join(&self, meta: &SubjectMeta) -> Option<SubjectData> {
        let entry = self.catalog.get(meta.id)?;
        Some(SubjectData {
            id: meta.id.to_string(),
            name: meta.name.to_string(),
            emoji: meta.emoji.to_string(),
            scope_and_sequence: entry.scope_and_sequence.clone(),
            unit_details: entry.unit_details.clone(),
        })
    }
}

#[async_trait]
impl CatalogStore for JsonCatalogStore {
    async fn get_subject(&self, subject_id: &str) -> Result<Option<SubjectData>> {
        Ok(find_subject(subject_id).and_then(|meta| self.join(meta)))
    }

    async fn all_subjects(&self) -> Result<BTreeMap<String, SubjectData>> {
        Ok(SUBJECTS
            .iter()
            .filter_map(|meta| self.join(meta))
            .map(|subject| (subject.id.clone(), subject))
            .collect())
    }
}
