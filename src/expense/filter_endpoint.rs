//! Endpoints for changing and clearing the filter on the expense list.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    auth::Token,
    expense::{
        ExpenseForm, ExpensesState, FilterCriteria,
        view::{expense_list, expenses_section},
    },
};

/// The values of the filter inputs. Empty inputs mean no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterForm {
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl From<FilterForm> for FilterCriteria {
    fn from(form: FilterForm) -> Self {
        Self {
            category_substring: form.category,
            min_amount: form.min_amount,
            max_amount: form.max_amount,
        }
    }
}

/// Replace the filter criteria and return the refreshed expense table.
pub async fn filter_expenses_endpoint(
    State(state): State<ExpensesState>,
    Extension(token): Extension<Token>,
    Form(form): Form<FilterForm>,
) -> Response {
    let criteria = FilterCriteria::from(form);
    tracing::debug!("Filtering expenses with {criteria:?}");

    state
        .sessions
        .with_session(&token.session_id, |list| {
            list.set_filter(criteria);
            expense_list(list).into_response()
        })
        .unwrap_or_else(Error::into_alert_response)
}

/// Remove every filter criterion and return the expense section with empty filter inputs.
pub async fn clear_filter_endpoint(
    State(state): State<ExpensesState>,
    Extension(token): Extension<Token>,
) -> Response {
    state
        .sessions
        .with_session(&token.session_id, |list| {
            list.clear_filter();
            expenses_section(list, &ExpenseForm::default(), true).into_response()
        })
        .unwrap_or_else(Error::into_alert_response)
}
