// HTTP gateway - typed wrappers over the remote backend

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

mod auth;
mod categories;
mod questions;
mod rooms;
mod sessions;
mod solo;

pub use questions::QuestionFilter;
pub use rooms::RoomFilter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Live bearer token, shared between the gateway (reader) and the
/// store (writer). Re-read on every outgoing request.
#[derive(Clone, Default)]
pub struct TokenCell(Arc<RwLock<Option<String>>>);

impl TokenCell {
    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, token: Option<String>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = token;
    }
}

// Main gateway handle
#[derive(Clone)]
pub struct Api {
    http: reqwest::Client,
    base_url: String,
    token: TokenCell,
}

impl Api {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("elg-client/{VERSION}"))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
            token: TokenCell::default(),
        })
    }

    pub fn token_cell(&self) -> &TokenCell {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (when present) and dispatch. A 401 from
    /// the backend becomes [`ApiError::Unauthorized`]; other failures
    /// carry the status plus the backend `message` field if the body
    /// has one.
    async fn send(&self, req: RequestBuilder, method: &str, path: &str) -> Result<Response, ApiError> {
        let token = self.token.get();
        tracing::debug!("API request: {method} {path}, token: {}", token.is_some());

        let req = match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        };

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::error!(
                "backend error for {method} {path}: {status} - {}",
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Status { status, message });
        }

        Ok(resp)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let req = self.http.get(self.url(path)).query(query);
        let resp = self.send(req, "GET", path).await?;
        decode(resp).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.http.post(self.url(path)).json(body);
        let resp = self.send(req, "POST", path).await?;
        decode(resp).await
    }

    /// POST with a body, response payload ignored.
    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let req = self.http.post(self.url(path)).json(body);
        self.send(req, "POST", path).await?;
        Ok(())
    }

    /// Bodyless POST, response payload ignored.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let req = self.http.post(self.url(path));
        self.send(req, "POST", path).await?;
        Ok(())
    }
}

/// The backend wraps some payloads as `{"data": ...}` and returns
/// others bare; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    fn into_inner(self) -> T {
        match self {
            Enveloped::Wrapped { data } => data,
            Enveloped::Bare(value) => value,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice::<Enveloped<T>>(&bytes)
        .map(Enveloped::into_inner)
        .map_err(ApiError::Decode)
}

pub(crate) fn push_param(query: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<impl ToString>) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}
