//! scopeseq-layout — Term grid layout engine.
//!
//! A term is an ordered list of units, each lasting some number of weeks.
//! Laying a term out is two pure steps:
//!
//!   1. [`normalise::normalise_term`] places units on a fixed row of week
//!      slots, clamping anything past the last week.
//!   2. [`merge::merge_slots`] collapses runs of the same unit into one cell
//!      with a column span.
//!
//! [`grid`] strings these together per term and per stage, and computes the
//! (presentation only) week header grouping.

pub mod normalise;
pub mod merge;
pub mod grid;

pub use grid::{layout_stage, layout_term, unit_slug, week_headers, HeaderCell, TermRow};
pub use merge::{cells_to_slots, merge_slots, GridCell};
pub use normalise::{normalise_term, scheduled_weeks, WeekSlot};

/// Weeks in a school term as displayed by the scope grid.
pub const TOTAL_WEEKS: usize = 10;

/// Weeks that get their own header before the tail is grouped.
pub const LABELLED_WEEKS: usize = 8;
