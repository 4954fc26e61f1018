use crate::draft::ProblemDraft;
use crate::models::{
    skip_invalid, CodeRequest, Problem, RunResult, SolvedProblem, SubmitResult, User,
};
use async_trait::async_trait;
use reqwest::{cookie::Jar, header, Client, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

type Result<T> = std::result::Result<T, ArenaClientError>;

/// Cookie the backend reads the session from.
pub const SESSION_COOKIE: &str = "token";

#[derive(Debug, Error)]
pub enum ArenaClientError {
    #[error("failed to request to backend")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to deserialize JSON data")]
    DeserializeError(#[from] serde_json::Error),
    #[error("invalid backend url given")]
    InvalidUrlError(#[from] url::ParseError),
    #[error("backend url `{0}` cannot be used as a base url")]
    InvalidBaseUrlError(String),
    #[error("backend responded with status {status}: {message}")]
    UnexpectedStatusError { status: u16, message: String },
}

#[async_trait]
pub trait ArenaApi {
    async fn all_problems(&self) -> Result<Vec<Problem>>;
    async fn problem_by_id(&self, id: &str) -> Result<Problem>;
    async fn solved_problems(&self) -> Result<Vec<SolvedProblem>>;
    async fn create_problem(&self, draft: &ProblemDraft) -> Result<()>;
    async fn update_problem(&self, id: &str, draft: &ProblemDraft) -> Result<()>;
    async fn all_users(&self) -> Result<Vec<User>>;
    async fn current_user(&self) -> Result<User>;
    async fn run_code(&self, id: &str, request: &CodeRequest<'_>) -> Result<RunResult>;
    async fn submit_code(&self, id: &str, request: &CodeRequest<'_>) -> Result<SubmitResult>;
}

pub struct HttpArenaClient {
    base_url: Url,
    client: Client,
}

impl HttpArenaClient {
    /// `session_token` is sent as the `token` cookie; cookies set by the backend are kept for the
    /// lifetime of the client.
    pub fn new(base_url: &str, session_token: Option<&str>, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ArenaClientError::InvalidBaseUrlError(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let jar = Jar::default();
        if let Some(token) = session_token {
            jar.add_cookie_str(&format!("{}={}", SESSION_COOKIE, token), &base_url);
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .cookie_provider(Arc::new(jar))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(HttpArenaClient { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ArenaClientError::InvalidBaseUrlError(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        tracing::debug!("GET {}", url);
        let res = self.client.get(url).send().await?;
        read_json(res).await
    }

    /// List endpoints: records that fail to decode are skipped, not fatal.
    async fn get_list<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>> {
        let values: Vec<Value> = self.get(segments).await?;
        Ok(skip_invalid(values))
    }

    async fn send_json<B, T>(&self, method: reqwest::Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);
        let res = self
            .client
            .request(method, url)
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;
        read_json(res).await
    }

    async fn send_json_ignoring_body<B>(
        &self,
        method: reqwest::Method,
        segments: &[&str],
        body: &B,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);
        let res = self
            .client
            .request(method, url)
            .body(serde_json::to_vec(body)?)
            .send()
            .await?;
        match res.error_for_status_ref() {
            Ok(_) => Ok(()),
            Err(_) => Err(error_from_response(res).await),
        }
    }
}

#[async_trait]
impl ArenaApi for HttpArenaClient {
    async fn all_problems(&self) -> Result<Vec<Problem>> {
        self.get_list(&["problem", "getAllProblem"]).await
    }

    async fn problem_by_id(&self, id: &str) -> Result<Problem> {
        self.get(&["problem", "problemById", id]).await
    }

    async fn solved_problems(&self) -> Result<Vec<SolvedProblem>> {
        self.get_list(&["problem", "problemSolvedByUser"]).await
    }

    async fn create_problem(&self, draft: &ProblemDraft) -> Result<()> {
        self.send_json_ignoring_body(reqwest::Method::POST, &["problem", "create"], draft)
            .await
    }

    async fn update_problem(&self, id: &str, draft: &ProblemDraft) -> Result<()> {
        self.send_json_ignoring_body(reqwest::Method::PUT, &["problem", "update", id], draft)
            .await
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        self.get_list(&["User", "getAllUser"]).await
    }

    async fn current_user(&self) -> Result<User> {
        self.get(&["user", "getUser"]).await
    }

    async fn run_code(&self, id: &str, request: &CodeRequest<'_>) -> Result<RunResult> {
        self.send_json(reqwest::Method::POST, &["submission", "run", id], request)
            .await
    }

    async fn submit_code(&self, id: &str, request: &CodeRequest<'_>) -> Result<SubmitResult> {
        self.send_json(reqwest::Method::POST, &["submission", "submit", id], request)
            .await
    }
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T> {
    match res.error_for_status_ref() {
        Ok(_) => {
            let body = res.bytes().await?;
            let value: T = serde_json::from_slice(&body)?;
            Ok(value)
        }
        Err(_) => Err(error_from_response(res).await),
    }
}

async fn error_from_response(res: Response) -> ArenaClientError {
    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    let message = backend_message(&body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
    tracing::error!("backend returned {}: {}", status, message);

    ArenaClientError::UnexpectedStatusError {
        status: status.as_u16(),
        message,
    }
}

#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: Option<String>,
}

/// Human readable part of an error body: its `message` field when it is JSON, otherwise the
/// raw text. `None` for blank bodies.
fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<BackendMessage>(body) {
        Ok(BackendMessage {
            message: Some(message),
        }) => Some(message),
        _ => Some(body.to_string()),
    }
}
