use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::config::ClientConfig;

/// Failure taxonomy for every authenticated backend call. The backend
/// signalling a rejected token is a distinct condition from any other
/// network or server failure and must be handled as such by callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("la sesión expiró")]
    Expired,
    #[error("{0}")]
    Failed(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Explicit session context passed into every client call. Built from the
/// stored access token; an empty or blank token never yields a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Thin HTTP wrapper over the Sinergia backend. All requests carry the
/// session bearer token; a 401 response maps to `ApiError::Expired`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
    ) -> ApiResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| ApiError::Failed(e.to_string()))?;
        let response = check_status(response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Failed(format!("respuesta inválida: {e}")))
    }

    pub(crate) async fn patch_json<B: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(session.token())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Failed(e.to_string()))?;
        check_status(response).map(|_| ())
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(session.token())
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Failed(e.to_string()))?;
        check_status(response).map(|_| ())
    }
}

fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Err(ApiError::Expired),
        status if status.is_success() => Ok(response),
        status => Err(ApiError::Failed(format!("el servidor respondió {status}"))),
    }
}
