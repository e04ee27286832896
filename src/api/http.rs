//! An [ExpenseApi] backed by HTTP requests to the remote expense API.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    api::{
        ApiError, AuthOutcome, ExpenseApi, RegistrationOutcome,
        models::{CredentialsBody, LogInResponse, NewExpenseBody, RegisterResponse},
    },
    expense::{ExpenseRecord, UserId},
};

/// The base URL of the hosted expense API.
pub const DEFAULT_API_URL: &str = "https://expense-back-q0qx.onrender.com/api";

// Each path is both the URL path below the base URL and the label used in logs and errors.
const LOG_IN: &str = "/login";
const REGISTER: &str = "/register";
const EXPENSES: &str = "/expenses";
const EXPENSE: &str = "/expense";

/// Talks to the remote expense API over HTTP with JSON bodies.
///
/// Each operation makes exactly one request. Failed requests are not retried.
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    client: Client,
    base_url: Url,
}

impl HttpExpenseApi {
    /// Create a client for the API hosted at `base_url`, e.g.
    /// "https://example.com/api".
    ///
    /// # Errors
    ///
    /// Returns [ApiError::InvalidUrl] if `base_url` is not an absolute URL
    /// that paths can be appended to.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidUrl(base_url.to_owned()))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// The base URL that endpoint paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL for `endpoint` below the base URL, followed by the escaped `params`.
    fn endpoint_url(&self, endpoint: &str, params: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.split('/').filter(|segment| !segment.is_empty()))
            .extend(params);

        Ok(url)
    }
}

async fn send(request: RequestBuilder, endpoint: &'static str) -> Result<Response, ApiError> {
    tracing::debug!("Sending request to {endpoint}");

    request.send().await.map_err(|error| ApiError::Transport {
        endpoint,
        message: error.to_string(),
    })
}

async fn decode<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        return Err(ApiError::Status {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|error| ApiError::Transport {
        endpoint,
        message: error.to_string(),
    })?;

    serde_json::from_slice(&body).map_err(|error| ApiError::Decode {
        endpoint,
        message: error.to_string(),
    })
}

/// Whether `status` means the API refused the credentials, rather than failed.
fn is_rejection(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    )
}

#[async_trait]
impl ExpenseApi for HttpExpenseApi {
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthOutcome, ApiError> {
        let url = self.endpoint_url(LOG_IN, &[])?;
        let request = self
            .client
            .post(url)
            .json(&CredentialsBody { email, password });
        let response = send(request, LOG_IN).await?;

        if is_rejection(response.status()) {
            // The reason is optional, so an unreadable body is still a rejection.
            let body = response
                .json::<LogInResponse>()
                .await
                .unwrap_or_default();

            return Ok(AuthOutcome::Rejected(body.message));
        }

        decode::<LogInResponse>(response, LOG_IN)
            .await
            .map(AuthOutcome::from)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<RegistrationOutcome, ApiError> {
        let url = self.endpoint_url(REGISTER, &[])?;
        let request = self
            .client
            .post(url)
            .json(&CredentialsBody { email, password });
        let response = send(request, REGISTER).await?;

        decode::<RegisterResponse>(response, REGISTER)
            .await
            .map(RegistrationOutcome::from)
    }

    async fn fetch_all(&self, user_id: &UserId) -> Result<Vec<ExpenseRecord>, ApiError> {
        let url = self.endpoint_url(EXPENSES, &[user_id.as_str()])?;
        let response = send(self.client.get(url), EXPENSES).await?;
        let values: Vec<serde_json::Value> = decode(response, EXPENSES).await?;

        Ok(values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(error) => {
                    tracing::warn!("Skipping expense {index} that is not a record: {error}");
                    None
                }
            })
            .collect())
    }

    async fn create_one(
        &self,
        user_id: &UserId,
        amount: &str,
        category: &str,
    ) -> Result<ExpenseRecord, ApiError> {
        let url = self.endpoint_url(EXPENSE, &[])?;
        let request = self.client.post(url).json(&NewExpenseBody {
            user_id,
            amount,
            category,
        });
        let response = send(request, EXPENSE).await?;

        decode(response, EXPENSE).await
    }
}
