//! The registration page for creating an account with the remote expense API.

use std::sync::Arc;

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    api::{ExpenseApi, RegistrationOutcome},
    auth::UNEXPECTED_ERROR_MSG,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, LINK_STYLE, base, email_input, loading_spinner, log_in_register,
        password_input,
    },
};

fn registration_form(email: &str, error_message: Option<&str>) -> Markup {
    html! {
        form
            hx-post=(endpoints::USERS)
            hx-indicator="#indicator"
            hx-disabled-elt="#email, #password, #submit-button"
            hx-swap="outerHTML"
            class="space-y-4 md:space-y-6"
        {
            (email_input(email))

            (password_input("new-password", error_message))

            button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="inline htmx-indicator" id="indicator"
                {
                    (loading_spinner())
                }
                "Sign up"
            }

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "Already have an account? "

                a href=(endpoints::LOG_IN_VIEW) tabindex="0" class=(LINK_STYLE)
                {
                  "Log in here"
                }
            }
        }
    }
}

/// Display the registration page.
pub async fn get_register_page() -> Response {
    let registration_form = registration_form("", None);
    let content = log_in_register("Create an account", &registration_form);
    base("Sign Up", &[], &content).into_response()
}

/// The state needed for creating a new user.
#[derive(Clone)]
pub struct RegistrationState {
    /// Creates the account.
    pub api: Arc<dyn ExpenseApi>,
}

impl FromRef<AppState> for RegistrationState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

/// Create an account and send the user to the log-in page.
///
/// The new account is not logged in automatically.
pub async fn register_user(
    State(state): State<RegistrationState>,
    Form(user_data): Form<RegisterForm>,
) -> Response {
    match state
        .api
        .register(&user_data.email, &user_data.password)
        .await
    {
        Ok(RegistrationOutcome::Registered(id)) => {
            tracing::info!("Registered new user {id}");
            (
                HxRedirect(endpoints::LOG_IN_VIEW.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Ok(RegistrationOutcome::Rejected) => {
            let message = Error::RegistrationFailure.to_string();
            registration_form(&user_data.email, Some(&message)).into_response()
        }
        Err(error) => {
            tracing::error!("Could not register user with the expense API: {error}");
            registration_form(&user_data.email, Some(UNEXPECTED_ERROR_MSG)).into_response()
        }
    }
}
