//! The expense list held for a single user session.
//!
//! All changes to the list and the filter go through [ExpenseListState::apply]
//! so that the filtered view is recomputed in exactly one place.

use crate::expense::{ExpenseRecord, FilterCriteria, compute_view};

/// A change to the expense list state.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// The bulk fetch returned these expenses, which replace the current list.
    Loaded(Vec<ExpenseRecord>),
    /// A newly created expense to add to the end of the list.
    Appended(ExpenseRecord),
    /// The user changed the filter criteria.
    FilterChanged(FilterCriteria),
}

/// Tracks whether the bulk fetch for a session has been started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No fetch has been attempted yet.
    #[default]
    NotStarted,
    /// A fetch is in flight. The list is empty until it finishes.
    Pending,
    /// The fetch finished, successfully or not.
    Finished,
}

/// The authoritative expense list for a session and the views derived from it.
#[derive(Debug, Clone, Default)]
pub struct ExpenseListState {
    records: Vec<ExpenseRecord>,
    criteria: FilterCriteria,
    view: Vec<ExpenseRecord>,
    error: Option<String>,
    load_status: LoadStatus,
}

impl ExpenseListState {
    /// Create an empty state with no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` and recompute the filtered view.
    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Loaded(records) => {
                self.records = records;
                self.load_status = LoadStatus::Finished;
            }
            ListEvent::Appended(record) => self.records.push(record),
            ListEvent::FilterChanged(criteria) => self.criteria = criteria,
        }

        self.view = compute_view(&self.records, &self.criteria);
    }

    /// Replace the list with `records`, keeping their order.
    pub fn load(&mut self, records: Vec<ExpenseRecord>) {
        self.apply(ListEvent::Loaded(records));
    }

    /// Add `record` to the end of the list.
    pub fn append(&mut self, record: ExpenseRecord) {
        self.apply(ListEvent::Appended(record));
    }

    /// Replace the active filter criteria.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        self.apply(ListEvent::FilterChanged(criteria));
    }

    /// Remove every filter criterion.
    pub fn clear_filter(&mut self) {
        self.set_filter(FilterCriteria::default());
    }

    /// The expenses matching the current criteria, in list order.
    pub fn filtered_view(&self) -> &[ExpenseRecord] {
        &self.view
    }

    /// Every expense in the list, ignoring the filter.
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// The active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The sum of every expense in the list, ignoring the filter.
    ///
    /// Expenses whose amount is not a number count as zero.
    pub fn total(&self) -> f64 {
        self.records
            .iter()
            .map(|record| record.parsed_amount().unwrap_or(0.0))
            .fold(0.0, |total, amount| total + amount)
    }

    /// The total rounded to two decimal places, e.g. "30.50".
    pub fn formatted_total(&self) -> String {
        format!("{:.2}", self.total())
    }

    /// The message to show the user for the last failed operation, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Record a failure to show to the user. The list is left unchanged.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Record that the bulk fetch failed, which leaves the list empty.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.load_status = LoadStatus::Finished;
        self.fail(message);
    }

    /// Clear the error message.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// The progress of the bulk fetch.
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// Claim the bulk fetch for this session.
    ///
    /// Returns `true` exactly once per session, and the caller must then
    /// fetch the expenses and call [ExpenseListState::load] or
    /// [ExpenseListState::fail_load].
    pub fn begin_load(&mut self) -> bool {
        if self.load_status != LoadStatus::NotStarted {
            return false;
        }

        self.load_status = LoadStatus::Pending;
        true
    }
}
