use std::collections::BTreeMap;

use async_trait::async_trait;
use scopeseq_common::SubjectData;

use crate::error::Result;

/// Read-only lookup over the curriculum catalog.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// A registered subject joined with its catalog entry. `None` if the id
    /// is not in the subject registry or the catalog has no data for it.
    async fn get_subject(&self, subject_id: &str) -> Result<Option<SubjectData>>;

    /// Every registered subject that has catalog data, keyed by id.
    async fn all_subjects(&self) -> Result<BTreeMap<String, SubjectData>>;
}
