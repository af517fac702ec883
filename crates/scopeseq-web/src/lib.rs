//! scopeseq-web — Web front end for the curriculum catalog.
//! Provides:
//!   - Subject hub
//!   - Scope and sequence grid viewer with unit detail panel
//!   - Custom schedule wizard
//!   - Read-only JSON API over the catalog and computed grid layouts

pub mod router;
pub mod handlers;
pub mod state;
pub mod templates;
pub mod view;
