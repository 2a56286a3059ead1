use std::sync::Arc;
use std::time::Duration;

use nexora_core::{AssessmentAnswers, Credentials, Dashboard, TrendingCareer};
use nexora_logging::{nexora_debug, nexora_warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::token::TokenStore;
use crate::{ApiError, FailureKind};

const ASSESSMENT_PATH: &str = "api/chatbot/assessment";
const CHAT_PATH: &str = "api/chat/ask/";
const TOKEN_PATH: &str = "api/token/";
const REGISTER_PATH: &str = "api/auth/register/";
const TRENDING_PATH: &str = "api/trending-careers";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Body for `/api/chat/ask/`: either a chat session or a named conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatRequest {
    Session { session_id: String, message: String },
    Conversation { message: String, conversation_id: String },
}

#[async_trait::async_trait]
pub trait CareerApi: Send + Sync {
    async fn submit_assessment(&self, answers: &AssessmentAnswers) -> Result<Dashboard, ApiError>;
    async fn ask(&self, request: &ChatRequest) -> Result<String, ApiError>;
    /// Exchanges credentials for a bearer token and stores it.
    async fn obtain_token(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn trending_careers(&self) -> Result<Vec<TrendingCareer>, ApiError>;
}

pub struct ReqwestApi {
    base_url: Url,
    client: reqwest::Client,
    tokens: Arc<dyn TokenStore>,
}

impl ReqwestApi {
    pub fn new(settings: &ApiSettings, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let mut raw = settings.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url =
            Url::parse(&raw).map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            base_url,
            client,
            tokens,
        })
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    async fn send(&self, method: Method, path: &str, body: Option<&impl Serialize>) -> Result<Value, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        nexora_debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(token) = self.tokens.get() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            let encoded = serde_json::to_vec(body)
                .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
            request = request.header(CONTENT_TYPE, "application/json").body(encoded);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if status == StatusCode::UNAUTHORIZED {
            nexora_warn!("API answered 401 for {}; discarding token", path);
            self.tokens.clear();
            return Err(ApiError::new(FailureKind::Unauthorized, status.to_string()));
        }
        if !status.is_success() {
            let detail = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
            return Err(
                ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_detail(detail),
            );
        }
        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CareerApi for ReqwestApi {
    async fn submit_assessment(&self, answers: &AssessmentAnswers) -> Result<Dashboard, ApiError> {
        let value = self.send(Method::POST, ASSESSMENT_PATH, Some(answers)).await?;
        Ok(Dashboard::from_value(value))
    }

    async fn ask(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let value = self.send(Method::POST, CHAT_PATH, Some(request)).await?;
        Ok(reply_text(&value))
    }

    async fn obtain_token(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let value = self.send(Method::POST, TOKEN_PATH, Some(credentials)).await?;
        match value.get("access").and_then(Value::as_str) {
            Some(access) if !access.is_empty() => {
                self.tokens.set(access);
                Ok(())
            }
            _ => Err(ApiError::new(FailureKind::Decode, "response has no access token")),
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.send(Method::POST, REGISTER_PATH, Some(credentials)).await?;
        Ok(())
    }

    async fn trending_careers(&self) -> Result<Vec<TrendingCareer>, ApiError> {
        let value = self.send(Method::GET, TRENDING_PATH, None::<&()>).await?;
        if value.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(value).map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

/// `text`, else `reply`, else an ellipsis.
fn reply_text(value: &Value) -> String {
    ["text", "reply"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .unwrap_or("...")
        .to_string()
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
