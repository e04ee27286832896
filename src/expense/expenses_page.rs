//! The page for listing, adding and filtering expenses.

use axum::{Extension, extract::State};
use maud::Markup;

use crate::{
    Error,
    auth::Token,
    expense::{ExpenseListState, ExpensesState, view::expenses_page},
};

/// Display the expense page.
///
/// The first visit in a session fetches the user's expenses from the API. The session lock
/// is released while the fetch is in flight, so other requests in the same session see an
/// empty list until it finishes.
pub async fn get_expenses_page(
    State(state): State<ExpensesState>,
    Extension(token): Extension<Token>,
) -> Result<Markup, Error> {
    let should_load = state
        .sessions
        .with_session(&token.session_id, ExpenseListState::begin_load)?;

    if should_load {
        let result = state.api.fetch_all(&token.user_id).await;

        state
            .sessions
            .with_session(&token.session_id, |list| match result {
                Ok(expenses) => {
                    tracing::info!(
                        "Loaded {} expenses for user {}",
                        expenses.len(),
                        token.user_id
                    );
                    list.load(expenses);
                }
                Err(error) => {
                    tracing::error!("Could not fetch expenses for user {}: {error}", token.user_id);
                    list.fail_load(Error::LoadFailure.to_string());
                }
            })?;
    }

    state
        .sessions
        .with_session(&token.session_id, |list| expenses_page(list))
}
