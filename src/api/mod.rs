//! The client for the remote expense API.
//!
//! The remote API owns user accounts and expenses. This application only
//! talks to it through the four operations on [ExpenseApi], which lets the
//! route handlers be tested against an in-memory implementation.

mod error;
mod http;
mod models;

use async_trait::async_trait;

use crate::expense::{ExpenseRecord, UserId};

pub use error::ApiError;
pub use http::{DEFAULT_API_URL, HttpExpenseApi};
pub use models::{AuthOutcome, RegistrationOutcome};

/// The operations offered by the remote expense API.
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// Check a user's credentials.
    ///
    /// A wrong email or password is reported as [AuthOutcome::Rejected], not
    /// as an error.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthOutcome, ApiError>;

    /// Create a new user account.
    async fn register(&self, email: &str, password: &str)
    -> Result<RegistrationOutcome, ApiError>;

    /// Get every expense belonging to `user_id`.
    async fn fetch_all(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, ApiError>;

    /// Create an expense for `user_id` and return it with its new ID.
    async fn create_one(
        &self,
        user_id: &UserId,
        amount: &str,
        category: &str,
    ) -> Result<ExpenseRecord, ApiError>;
}
