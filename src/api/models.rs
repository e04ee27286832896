//! Request and response bodies of the remote expense API.

use serde::{Deserialize, Serialize};

use crate::expense::UserId;

/// The result of checking a user's credentials.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// The credentials are valid and belong to this user.
    Authenticated(UserId),
    /// The credentials were rejected, optionally with a reason from the API.
    Rejected(Option<String>),
}

/// The result of creating a user account.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// The account was created with this ID.
    Registered(String),
    /// The API did not create the account.
    Rejected,
}

#[derive(Serialize)]
pub(super) struct CredentialsBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(super) struct NewExpenseBody<'a> {
    #[serde(rename = "userId")]
    pub user_id: &'a UserId,
    pub amount: &'a str,
    pub category: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogInResponse {
    pub success: bool,
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
    pub message: Option<String>,
}

impl From<LogInResponse> for AuthOutcome {
    fn from(response: LogInResponse) -> Self {
        match response {
            LogInResponse {
                success: true,
                user_id: Some(user_id),
                ..
            } => AuthOutcome::Authenticated(user_id),
            LogInResponse { message, .. } => AuthOutcome::Rejected(message),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RegisterResponse {
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

impl From<RegisterResponse> for RegistrationOutcome {
    fn from(response: RegisterResponse) -> Self {
        match response.id {
            Some(id) if !id.is_empty() => RegistrationOutcome::Registered(id),
            _ => RegistrationOutcome::Rejected,
        }
    }
}
