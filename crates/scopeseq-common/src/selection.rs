//! Custom schedule selection for the wizard.
//!
//! A `Selection` is a value: every operation returns a new selection and
//! leaves the receiver untouched, so a page render can be driven entirely by
//! the picks submitted with the request.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ScopeError;

pub const MIN_TERM: u8 = 1;
pub const MAX_TERM: u8 = 4;

/// Separator used in the wizard's `pick` form values: `subject|unit name|term`.
pub const PICK_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedUnit {
    pub id: String,
    pub unit_name: String,
    pub subject: String,
    pub subject_name: String,
    pub term: u8,
    pub description: String,
    pub outcomes: Vec<String>,
}

/// Key a unit is selected under. Units are unique per subject, not globally.
pub fn selection_key(subject: &str, unit_name: &str) -> String {
    format!("{subject}-{unit_name}")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    units: BTreeMap<String, SelectedUnit>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&SelectedUnit> {
        self.units.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedUnit> {
        self.units.values()
    }

    /// Select the unit in term 1, or deselect it if already selected.
    /// Calls missing a unit name, subject id, or subject name are ignored.
    pub fn toggle(
        &self,
        unit_name: &str,
        subject: &str,
        subject_name: &str,
        description: &str,
        outcomes: &[String],
    ) -> Selection {
        let mut next = self.clone();
        if unit_name.is_empty() || subject.is_empty() || subject_name.is_empty() {
            return next;
        }

        let id = selection_key(subject, unit_name);
        if next.units.remove(&id).is_none() {
            next.units.insert(id.clone(), SelectedUnit {
                id,
                unit_name: unit_name.to_string(),
                subject: subject.to_string(),
                subject_name: subject_name.to_string(),
                term: MIN_TERM,
                description: description.to_string(),
                outcomes: outcomes.to_vec(),
            });
        }
        next
    }

    /// Move a selected unit to another term. Unknown ids leave the selection unchanged.
    pub fn with_term(&self, id: &str, term: i64) -> Result<Selection, ScopeError> {
        let term = validate_term(term)?;
        let mut next = self.clone();
        if let Some(unit) = next.units.get_mut(id) {
            unit.term = term;
        }
        Ok(next)
    }

    /// Selected units bucketed by term. Terms with nothing selected are absent.
    pub fn grouped_by_term(&self) -> BTreeMap<u8, Vec<SelectedUnit>> {
        let mut grouped: BTreeMap<u8, Vec<SelectedUnit>> = BTreeMap::new();
        for unit in self.units.values() {
            grouped.entry(unit.term).or_default().push(unit.clone());
        }
        grouped
    }
}

fn validate_term(term: i64) -> Result<u8, ScopeError> {
    if (MIN_TERM as i64..=MAX_TERM as i64).contains(&term) {
        Ok(term as u8)
    } else {
        Err(ScopeError::InvalidTerm(term))
    }
}

/// A parsed wizard pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub subject: String,
    pub unit_name: String,
    pub term: u8,
}

impl Pick {
    pub fn encode(&self) -> String {
        format!("{}{sep}{}{sep}{}", self.subject, self.unit_name, self.term, sep = PICK_SEPARATOR)
    }
}

/// Parse `subject|unit name|term`. An empty value is "not picked" and yields
/// `None`. The unit name is everything between the first and last separator,
/// so names containing `|` survive.
pub fn parse_pick(raw: &str) -> Result<Option<Pick>, ScopeError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let (subject, rest) = raw
        .split_once(PICK_SEPARATOR)
        .ok_or_else(|| ScopeError::InvalidPick(raw.to_string()))?;
    let (unit_name, term) = rest
        .rsplit_once(PICK_SEPARATOR)
        .ok_or_else(|| ScopeError::InvalidPick(raw.to_string()))?;

    if subject.is_empty() || unit_name.is_empty() {
        return Err(ScopeError::InvalidPick(raw.to_string()));
    }
    let term: i64 = term
        .trim()
        .parse()
        .map_err(|_| ScopeError::InvalidPick(raw.to_string()))?;

    Ok(Some(Pick {
        subject: subject.to_string(),
        unit_name: unit_name.to_string(),
        term: validate_term(term)?,
    }))
}
