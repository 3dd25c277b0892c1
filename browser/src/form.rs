//! Report-creation form: draft, validation, and the submit state machine.
//!
//! The modal's lifecycle is `Closed -> Open (empty or prefilled) ->
//! { Invalid <-> Valid } -> Submitted -> Closed`; Cancel drops straight
//! back to Closed, discarding the draft. Validation errors are values,
//! not `Err`s - a map from field to a typed message that the UI shows
//! inline once the field has been touched.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::types::Report;

/// The four form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum DraftField {
    /// Report name.
    Name,
    /// Simulation scenario.
    Scenario,
    /// First day of the campaign window.
    StartDate,
    /// Last day of the campaign window.
    EndDate,
}

impl DraftField {
    /// All fields, in display order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Scenario,
        DraftField::StartDate,
        DraftField::EndDate,
    ];
}

/// A single field's validation failure. `Display` is the inline message
/// rendered beneath the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A required text field is empty.
    #[error("This field is required")]
    Required,
    /// No start date picked.
    #[error("Start date is required")]
    StartDateRequired,
    /// No end date picked.
    #[error("End date is required")]
    EndDateRequired,
    /// End date falls before the start date.
    #[error("End date must be later than start date")]
    EndBeforeStart,
}

/// In-progress contents of the modal form.
///
/// Dates are `Option` because the pickers start empty; an input string
/// that fails to parse as a date is treated as unset, so no invalid
/// calendar value can survive past this boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    /// Report name.
    pub name: String,
    /// Simulation scenario.
    pub scenario: String,
    /// First day of the campaign window.
    pub start_date: Option<NaiveDate>,
    /// Last day of the campaign window.
    pub end_date: Option<NaiveDate>,
}

/// Finalized record produced by a successful submit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Report name.
    pub name: String,
    /// Simulation scenario.
    pub scenario: String,
    /// First day of the campaign window.
    pub start_date: NaiveDate,
    /// Last day of the campaign window.
    pub end_date: NaiveDate,
}

impl Submission {
    /// Finalize into a report row under `key`.
    ///
    /// The form collects name, scenario, and the date window; the
    /// remaining row fields start from the defaults a fresh simulation
    /// report gets ("Link" payload, "Normal" level, no tags).
    pub fn to_report(&self, key: String) -> Report {
        Report {
            key,
            name: self.name.clone(),
            tags: Vec::new(),
            contain: "Link".into(),
            level: "Normal".into(),
            date: self.start_date,
            scenario: self.scenario.clone(),
        }
    }
}

/// Validate `draft`, returning an error per violated field. An empty map
/// signals a valid draft.
pub fn validate(draft: &ReportDraft) -> BTreeMap<DraftField, FieldError> {
    let mut errors = BTreeMap::new();
    if draft.name.is_empty() {
        errors.insert(DraftField::Name, FieldError::Required);
    }
    if draft.scenario.is_empty() {
        errors.insert(DraftField::Scenario, FieldError::Required);
    }
    match (draft.start_date, draft.end_date) {
        (Some(start), Some(end)) => {
            if end < start {
                errors.insert(DraftField::EndDate, FieldError::EndBeforeStart);
            }
        }
        (start, end) => {
            if start.is_none() {
                errors.insert(DraftField::StartDate, FieldError::StartDateRequired);
            }
            if end.is_none() {
                errors.insert(DraftField::EndDate, FieldError::EndDateRequired);
            }
        }
    }
    errors
}

/// Whether the modal is composing a new report or editing an existing row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Composing a new report.
    #[default]
    Create,
    /// Editing the row with this key.
    Edit {
        /// Identity of the row being edited.
        key: String,
    },
}

/// Modal form state: the draft, which fields have been touched, and the
/// create/edit mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    /// The in-progress draft.
    pub draft: ReportDraft,
    /// The create/edit context this form was opened in.
    pub mode: FormMode,
    touched: BTreeSet<DraftField>,
}

impl FormState {
    /// Fresh state for composing a new report.
    pub fn create() -> Self {
        Self::default()
    }

    /// State prefilled from `row` for the Edit action. The row's single
    /// date seeds both ends of the window.
    pub fn edit(row: &Report) -> Self {
        Self {
            draft: ReportDraft {
                name: row.name.clone(),
                scenario: row.scenario.clone(),
                start_date: Some(row.date),
                end_date: Some(row.date),
            },
            mode: FormMode::Edit {
                key: row.key.clone(),
            },
            touched: BTreeSet::new(),
        }
    }

    /// Mark `field` as interacted with; its error becomes eligible for
    /// display.
    pub fn touch(&mut self, field: DraftField) {
        self.touched.insert(field);
    }

    /// The error to show beneath `field` - only once it has been touched.
    pub fn visible_error(&self, field: DraftField) -> Option<FieldError> {
        if !self.touched.contains(&field) {
            return None;
        }
        validate(&self.draft).get(&field).copied()
    }

    /// Whether the draft currently passes every rule.
    pub fn is_valid(&self) -> bool {
        validate(&self.draft).is_empty()
    }

    /// Finalize the draft.
    ///
    /// Succeeds only in the Valid state: yields the [`Submission`] and
    /// resets the draft and touched set so the next open starts empty.
    /// In the Invalid state, returns `None` and marks every field touched
    /// so all outstanding errors become visible.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.is_valid() {
            self.touched.extend(DraftField::ALL);
            return None;
        }
        let (start_date, end_date) = (self.draft.start_date?, self.draft.end_date?);
        let draft = std::mem::take(&mut self.draft);
        self.touched.clear();
        Some(Submission {
            name: draft.name,
            scenario: draft.scenario,
            start_date,
            end_date,
        })
    }
}
