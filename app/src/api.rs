use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::ActivityCollection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// How the server answered a signup or unregister request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Success status, with the server's `message` if it sent one.
    Accepted(Option<String>),
    /// Non-success status, with the server's `detail` if it was a usable string.
    Rejected(Option<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Signup,
    Unregister,
}

impl Action {
    fn path(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Unregister => "unregister",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ActionBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

// Validation errors carry `detail` as a list; only plain non-empty strings are shown.
fn text_field(v: Option<Value>) -> Option<String> {
    match v {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Turns a mutation response into an [`Outcome`]. A body that is not JSON
/// is a decode error whatever the status was.
pub fn interpret(ok: bool, body: &str) -> Result<Outcome, ApiError> {
    let body: ActionBody =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(if ok {
        Outcome::Accepted(text_field(body.message))
    } else {
        Outcome::Rejected(text_field(body.detail))
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    /// `/activities/{name}/{action}?email={email}` with both values percent-encoded.
    pub fn action_url(&self, action: Action, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{}?email={}",
            self.base_url,
            urlencoding::encode(activity),
            action.path(),
            urlencoding::encode(email)
        )
    }

    pub async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        let resp = Request::get(&self.activities_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<ActivityCollection>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<Outcome, ApiError> {
        self.post_action(Action::Signup, activity, email).await
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Outcome, ApiError> {
        self.post_action(Action::Unregister, activity, email).await
    }

    async fn post_action(
        &self,
        action: Action,
        activity: &str,
        email: &str,
    ) -> Result<Outcome, ApiError> {
        let resp = Request::post(&self.action_url(action, activity, email))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        interpret(resp.ok(), &body)
    }
}
