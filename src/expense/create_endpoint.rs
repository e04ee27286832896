//! Defines the endpoint for creating a new expense.

use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::html;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    alert::Alert,
    auth::Token,
    expense::{ExpensesState, view::expenses_section},
};

/// The form data for creating an expense.
///
/// The amount is sent to the API as the user typed it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The value of the expense in dollars.
    pub amount: String,
    /// A free-text label for the expense.
    pub category: String,
}

/// A route handler for creating a new expense.
///
/// On success the expense is added to the end of the session's list and the expense section
/// is returned with an empty form. On failure the list is unchanged and the section shows an
/// error message with the form values kept.
pub async fn create_expense_endpoint(
    State(state): State<ExpensesState>,
    Extension(token): Extension<Token>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let result = state
        .api
        .create_one(&token.user_id, &form.amount, &form.category)
        .await;

    let rendered = state.sessions.with_session(&token.session_id, |list| match result {
        Ok(expense) => {
            tracing::info!("Created expense {}", expense.id);
            list.dismiss_error();
            list.append(expense);

            let alert = Alert::Success {
                message: "Expense added".to_owned(),
                details: String::new(),
            };

            html! {
                (expenses_section(list, &ExpenseForm::default(), false))
                (alert.into_html())
            }
            .into_response()
        }
        Err(error) => {
            tracing::error!("Could not create expense: {error}");
            list.fail(Error::CreateFailure.to_string());

            expenses_section(list, &form, false).into_response()
        }
    });

    rendered.unwrap_or_else(Error::into_alert_response)
}

#[cfg(test)]
mod tests {
    use axum::{Extension, extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use scraper::Selector;

    use crate::{
        expense::test_utils::{expense, get_test_state},
        test_utils::{ApiCall, FakeExpenseApi, parse_html_fragment},
    };

    use super::{ExpenseForm, create_expense_endpoint};

    fn form(amount: &str, category: &str) -> ExpenseForm {
        ExpenseForm {
            amount: amount.to_owned(),
            category: category.to_owned(),
        }
    }

    #[tokio::test]
    async fn can_create_expense() {
        let (state, api, token) = get_test_state(FakeExpenseApi::new());
        state
            .sessions
            .with_session(&token.session_id, |list| {
                list.load(vec![expense("1", "10", "Food")])
            })
            .unwrap();

        let response = create_expense_endpoint(
            State(state.clone()),
            Extension(token.clone()),
            Form(form("20.5", "Transport")),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let (count, total, last_category) = state
            .sessions
            .with_session(&token.session_id, |list| {
                (
                    list.records().len(),
                    list.formatted_total(),
                    list.records().last().map(|record| record.category.clone()),
                )
            })
            .unwrap();
        assert_eq!(count, 2);
        assert_eq!(total, "30.50");
        assert_eq!(last_category, Some("Transport".to_owned()));
        assert_eq!(
            api.calls(),
            vec![ApiCall::CreateOne {
                user_id: token.user_id.clone(),
                amount: "20.5".to_owned(),
                category: "Transport".to_owned(),
            }]
        );

        let html = parse_html_fragment(response).await;
        let amount_input = html
            .select(&Selector::parse("input#amount").unwrap())
            .next()
            .expect("No amount input");
        assert_eq!(amount_input.value().attr("value"), Some(""));
        assert!(
            html.select(&Selector::parse("#alert-container").unwrap())
                .next()
                .is_some(),
            "expected a success alert"
        );
    }

    #[tokio::test]
    async fn failed_create_leaves_list_unchanged() {
        let (state, _, token) = get_test_state(FakeExpenseApi::new().failing_create());
        state
            .sessions
            .with_session(&token.session_id, |list| {
                list.load(vec![expense("1", "10", "Food")])
            })
            .unwrap();

        let response = create_expense_endpoint(
            State(state.clone()),
            Extension(token.clone()),
            Form(form("20", "Transport")),
        )
        .await;

        let (count, error) = state
            .sessions
            .with_session(&token.session_id, |list| {
                (list.records().len(), list.error().map(str::to_owned))
            })
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            error,
            Some("An error occurred. Please try again.".to_owned())
        );

        let html = parse_html_fragment(response).await;
        let error_text = html
            .select(&Selector::parse("#expense-error").unwrap())
            .next()
            .expect("No error message")
            .text()
            .collect::<String>();
        assert_eq!(error_text, "An error occurred. Please try again.");
        let category_input = html
            .select(&Selector::parse("input#category").unwrap())
            .next()
            .expect("No category input");
        assert_eq!(category_input.value().attr("value"), Some("Transport"));
    }

    #[tokio::test]
    async fn successful_create_clears_previous_error() {
        let (state, _, token) = get_test_state(FakeExpenseApi::new());
        state
            .sessions
            .with_session(&token.session_id, |list| list.fail("earlier failure"))
            .unwrap();

        create_expense_endpoint(
            State(state.clone()),
            Extension(token.clone()),
            Form(form("5", "Coffee")),
        )
        .await;

        let error = state
            .sessions
            .with_session(&token.session_id, |list| list.error().map(str::to_owned))
            .unwrap();
        assert_eq!(error, None);
    }

    #[tokio::test]
    async fn new_expense_respects_active_filter() {
        let (state, _, token) = get_test_state(FakeExpenseApi::new());
        state
            .sessions
            .with_session(&token.session_id, |list| {
                list.set_filter(crate::expense::FilterCriteria {
                    category_substring: Some("food".to_owned()),
                    ..Default::default()
                })
            })
            .unwrap();

        create_expense_endpoint(
            State(state.clone()),
            Extension(token.clone()),
            Form(form("5", "Coffee")),
        )
        .await;

        let (record_count, view_count) = state
            .sessions
            .with_session(&token.session_id, |list| {
                (list.records().len(), list.filtered_view().len())
            })
            .unwrap();
        assert_eq!(record_count, 1);
        assert_eq!(view_count, 0);
    }
}
