//! Filtering expenses by category and amount.

use crate::expense::ExpenseRecord;

/// The criteria used to narrow down the expense list.
///
/// Every field is optional, and an absent field places no constraint on the
/// list. The default value matches every expense.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Only keep expenses whose category contains this text, ignoring case.
    ///
    /// An empty string is treated the same as `None`.
    pub category_substring: Option<String>,

    /// Only keep expenses with an amount greater than or equal to this value.
    pub min_amount: Option<f64>,

    /// Only keep expenses with an amount less than or equal to this value.
    pub max_amount: Option<f64>,
}

impl FilterCriteria {
    /// Whether any criterion would exclude an expense.
    pub fn is_active(&self) -> bool {
        self.category_needle().is_some() || self.min_amount.is_some() || self.max_amount.is_some()
    }

    /// Whether `record` satisfies every active criterion.
    ///
    /// A record whose amount is not a number never satisfies an amount bound.
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.matches_category(record) && self.matches_amount(record)
    }

    fn category_needle(&self) -> Option<&str> {
        self.category_substring
            .as_deref()
            .filter(|needle| !needle.is_empty())
    }

    fn matches_category(&self, record: &ExpenseRecord) -> bool {
        match self.category_needle() {
            Some(needle) => record
                .category
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    fn matches_amount(&self, record: &ExpenseRecord) -> bool {
        if self.min_amount.is_none() && self.max_amount.is_none() {
            return true;
        }

        let Some(amount) = record.parsed_amount() else {
            return false;
        };

        self.min_amount.is_none_or(|min| amount >= min)
            && self.max_amount.is_none_or(|max| amount <= max)
    }
}

/// Select the expenses in `records` that match `criteria`, keeping their order.
pub fn compute_view(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
