//! scopeseq catalog store
//!
//! Read-only access to the curriculum catalog. The catalog is a single JSON
//! document loaded once at startup; nothing here ever writes it back.
//!
//! # Example
//!
//! ```rust,no_run
//! use scopeseq_store::{CatalogStore, JsonCatalogStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonCatalogStore::from_path("data/curriculum-data.json")?;
//!     if let Some(maths) = store.get_subject("maths").await? {
//!         println!("{} stages", maths.scope_and_sequence.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod store;
pub mod json;

pub use error::{Result, StoreError};
pub use json::JsonCatalogStore;
pub use store::CatalogStore;
