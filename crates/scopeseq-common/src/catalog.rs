/// Curriculum catalog types.
/// These mirror the static catalog JSON: field names on the wire are camelCase.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

/// Unit key that stands for "no unit selected". The catalog may also carry
/// placeholder details under this key.
pub const DEFAULT_UNIT_KEY: &str = "default";

// ---------------------------------------------------------------------------
// Scope and sequence
// ---------------------------------------------------------------------------

/// A named block of curriculum content running for a number of weeks.
/// `weeks` is signed because upstream data is not validated; the layout
/// engine treats anything `<= 0` as occupying no columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumUnit {
    pub name: String,
    pub weeks: i64,
}

impl CurriculumUnit {
    pub fn new(name: impl Into<String>, weeks: i64) -> Self {
        Self { name: name.into(), weeks }
    }
}

/// One school term: an ordered sequence of units.
pub type Term = Vec<CurriculumUnit>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageData {
    pub title: String,
    /// Index 0 is Term 1.
    #[serde(default)]
    pub terms: Vec<Term>,
}

pub type ScopeAndSequence = BTreeMap<String, StageData>;

// ---------------------------------------------------------------------------
// Unit details
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub week: u32,
    pub focus: String,
    #[serde(default)]
    pub learning_activities: Vec<String>,
    #[serde(default)]
    pub assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfWork {
    pub overview: String,
    pub duration: String,
    pub rationale: String,
    #[serde(default)]
    pub learning_objectives: Vec<String>,
    #[serde(default)]
    pub weekly_plan: Vec<WeeklyActivity>,
    #[serde(default)]
    pub assessment_strategies: Vec<String>,
    #[serde(default)]
    pub differentiation_strategies: Vec<String>,
    #[serde(default)]
    pub resources_needed: Vec<String>,
    #[serde(default)]
    pub safeguards_and_considerations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDetails {
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lesson: Vec<String>,
    #[serde(default)]
    pub curriculum: Vec<String>,
    #[serde(default)]
    pub support: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_work: Option<UnitOfWork>,
}

pub type UnitDetailsData = BTreeMap<String, UnitDetails>;

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// Raw per-subject entry as stored in the catalog file, before it is joined
/// with the subject registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    #[serde(default)]
    pub scope_and_sequence: ScopeAndSequence,
    #[serde(default)]
    pub unit_details: UnitDetailsData,
}

/// A subject as served by the API: registry metadata plus its catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectData {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub scope_and_sequence: ScopeAndSequence,
    pub unit_details: UnitDetailsData,
}

/// A unit offered by the wizard, with the detail fields it displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSummary {
    pub name: String,
    pub description: String,
    pub outcomes: Vec<String>,
}

impl SubjectData {
    /// Stage ids in display order: integer-like ids ascending by value,
    /// then everything else lexically.
    pub fn stage_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.scope_and_sequence.keys().map(String::as_str).collect();
        ids.sort_by_key(|id| match id.parse::<u64>() {
            Ok(n) => (0, n, id.to_string()),
            Err(_) => (1, 0, id.to_string()),
        });
        ids
    }

    /// The stage shown when none is requested.
    pub fn default_stage(&self) -> Option<&str> {
        self.stage_ids().into_iter().next()
    }

    pub fn stage(&self, stage_id: &str) -> Option<&StageData> {
        self.scope_and_sequence.get(stage_id)
    }

    /// Details for `unit_name`, falling back to the catalog's `"default"` entry.
    pub fn unit_details_or_default(&self, unit_name: &str) -> Option<&UnitDetails> {
        self.unit_details
            .get(unit_name)
            .or_else(|| self.unit_details.get(DEFAULT_UNIT_KEY))
    }

    /// Every unit with a details entry, deduplicated by name in first-seen
    /// order across stages (display order) and terms.
    pub fn distinct_units(&self) -> Vec<UnitSummary> {
        let mut seen = HashSet::new();
        let mut units = Vec::new();
        for stage_id in self.stage_ids() {
            let Some(stage) = self.stage(stage_id) else { continue };
            for unit in stage.terms.iter().flatten() {
                let Some(details) = self.unit_details.get(&unit.name) else { continue };
                if seen.insert(unit.name.as_str()) {
                    units.push(UnitSummary {
                        name: unit.name.clone(),
                        description: details.description.clone(),
                        outcomes: details.outcomes.clone(),
                    });
                }
            }
        }
        units
    }
}
