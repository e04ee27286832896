//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, api::ApiError, internal_server_error::InternalServerError,
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
///
/// The first four variants are the failures a user can see. Their display
/// text is the message shown on the page.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The expenses for the session could not be fetched from the API.
    #[error("An error occurred while fetching expenses.")]
    LoadFailure,

    /// The API did not create a new expense.
    ///
    /// Network errors and validation errors from the API are not told apart.
    #[error("An error occurred. Please try again.")]
    CreateFailure,

    /// The API rejected the user's email and password.
    ///
    /// Holds the reason given by the API, if there was one.
    #[error("{}", .0.as_deref().unwrap_or("Invalid email or password."))]
    AuthFailure(Option<String>),

    /// The API did not create the new account.
    #[error("Registration failed. Please try again.")]
    RegistrationFailure,

    /// A call to the remote API failed.
    ///
    /// The details should only be logged. The user is shown a generic message.
    #[error("the expense API request failed: {0}")]
    Api(#[from] ApiError),

    /// The auth token cookie is missing from the cookie jar in the request.
    #[error("no cookies in the cookie jar :(")]
    CookieMissing,

    /// The auth token could not be serialized into or read from its cookie.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not read or write the auth token: {0}")]
    InvalidToken(String),

    /// The expiry date time of the auth cookie could not be computed.
    #[error("could not compute the auth cookie expiry date time")]
    InvalidDateFormat,

    /// Could not acquire the lock on the session store.
    #[error("could not acquire the session lock")]
    SessionLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::LoadFailure => InternalServerError {
                description: "Could not load expenses",
                fix: "The expense service could not be reached. Please try again later.",
            }
            .into_response(),
            Error::SessionLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::LoadFailure | Error::CreateFailure => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: self.to_string(),
                    details: "The expense service could not complete the request.".to_owned(),
                },
            ),
            Error::SessionLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Something went wrong".to_owned(),
                    details: "Your session could not be accessed. Try refreshing the page."
                        .to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details: "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
