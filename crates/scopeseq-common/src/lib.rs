//! scopeseq-common — Shared catalog types, subject registry, and errors used across all scopeseq crates.

pub mod error;
pub mod catalog;
pub mod subjects;
pub mod stage;
pub mod selection;

// Re-export commonly used types
pub use catalog::{CurriculumUnit, StageData, SubjectData, UnitDetails, UnitOfWork, WeeklyActivity};
pub use error::{ApiError, ScopeError};
pub use subjects::{SubjectMeta, SUBJECTS};
