use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    api::{ApiError, AuthOutcome, ExpenseApi, RegistrationOutcome},
    expense::{ExpenseId, ExpenseRecord, UserId},
};

/// A call made to [FakeExpenseApi].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    Authenticate { email: String },
    Register { email: String },
    FetchAll(UserId),
    CreateOne {
        user_id: UserId,
        amount: String,
        category: String,
    },
}

/// An in-memory [ExpenseApi] with scripted responses that records every call.
pub(crate) struct FakeExpenseApi {
    auth: Result<AuthOutcome, ApiError>,
    registration: Result<RegistrationOutcome, ApiError>,
    expenses: Result<Vec<ExpenseRecord>, ApiError>,
    create_error: Option<ApiError>,
    calls: Mutex<Vec<ApiCall>>,
}

impl Default for FakeExpenseApi {
    fn default() -> Self {
        Self {
            auth: Ok(AuthOutcome::Authenticated(UserId::new("user-1"))),
            registration: Ok(RegistrationOutcome::Registered("user-2".to_owned())),
            expenses: Ok(Vec::new()),
            create_error: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

pub(crate) fn transport_error(endpoint: &'static str) -> ApiError {
    ApiError::Transport {
        endpoint,
        message: "connection refused".to_owned(),
    }
}

impl FakeExpenseApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_auth(mut self, auth: Result<AuthOutcome, ApiError>) -> Self {
        self.auth = auth;
        self
    }

    pub(crate) fn with_registration(
        mut self,
        registration: Result<RegistrationOutcome, ApiError>,
    ) -> Self {
        self.registration = registration;
        self
    }

    pub(crate) fn with_expenses(mut self, expenses: Vec<ExpenseRecord>) -> Self {
        self.expenses = Ok(expenses);
        self
    }

    pub(crate) fn failing_fetch(mut self) -> Self {
        self.expenses = Err(transport_error("/expenses"));
        self
    }

    pub(crate) fn failing_create(mut self) -> Self {
        self.create_error = Some(ApiError::Status {
            endpoint: "/expense",
            status: 400,
        });
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::FetchAll(_)))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ExpenseApi for FakeExpenseApi {
    async fn authenticate(&self, email: &str, _password: &str) -> Result<AuthOutcome, ApiError> {
        self.record(ApiCall::Authenticate {
            email: email.to_owned(),
        });
        self.auth.clone()
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<RegistrationOutcome, ApiError> {
        self.record(ApiCall::Register {
            email: email.to_owned(),
        });
        self.registration.clone()
    }

    async fn fetch_all(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, ApiError> {
        self.record(ApiCall::FetchAll(user_id.clone()));
        self.expenses.clone()
    }

    async fn create_one(
        &self,
        user_id: &UserId,
        amount: &str,
        category: &str,
    ) -> Result<ExpenseRecord, ApiError> {
        self.record(ApiCall::CreateOne {
            user_id: user_id.clone(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        });

        if let Some(error) = &self.create_error {
            return Err(error.clone());
        }

        let created_count = self
            .calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::CreateOne { .. }))
            .count();

        Ok(ExpenseRecord {
            id: ExpenseId::new(format!("created-{created_count}")),
            owner_id: user_id.clone(),
            amount: amount.to_owned(),
            category: category.to_owned(),
        })
    }
}
