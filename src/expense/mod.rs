//! Expense management: the per-session expense list and the page for adding and filtering
//! expenses.

mod create_endpoint;
mod expenses_page;
mod filter;
mod filter_endpoint;
mod record;
mod state;
mod view;

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{AppState, api::ExpenseApi, session::SessionStore};

pub use create_endpoint::{ExpenseForm, create_expense_endpoint};
pub use expenses_page::get_expenses_page;
pub use filter::{FilterCriteria, compute_view};
pub use filter_endpoint::{clear_filter_endpoint, filter_expenses_endpoint};
pub use record::{ExpenseId, ExpenseRecord, UserId};
pub use state::ExpenseListState;

/// The state needed to show and change a session's expenses.
#[derive(Clone)]
pub struct ExpensesState {
    /// Fetches and creates expenses.
    pub api: Arc<dyn ExpenseApi>,
    /// The expense list of every logged-in session.
    pub sessions: SessionStore,
}

impl FromRef<AppState> for ExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
            sessions: state.sessions.clone(),
        }
    }
}

impl FromRef<AppState> for SessionStore {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
