use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;

use crate::config::ApiConfig;

use super::error::ApiError;
use super::types::{StudentId, StudentPayload, StudentRecord};

/// Remote store of student records.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// `GET /alunos/{id}`
    async fn fetch(&self, id: &StudentId) -> Result<StudentRecord, ApiError>;

    /// `POST /alunos`. The returned record carries the assigned id.
    async fn create(&self, payload: &StudentPayload) -> Result<StudentRecord, ApiError>;

    /// `PUT /alunos/{id}`. Only success matters; the response body is ignored.
    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ApiError>;
}

/// Error body shape used by the API for 4xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// reqwest-backed [`StudentService`].
#[derive(Clone)]
pub struct HttpStudentService {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpStudentService {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Replaces the bearer token sent with each request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/alunos", self.base_url)
    }

    fn item_url(&self, id: &StudentId) -> String {
        format!("{}/alunos/{}", self.base_url, id)
    }

    async fn execute(
        &self,
        url: String,
        builder: RequestBuilder,
    ) -> Result<StudentRecord, ApiError> {
        let body = self.send(url, builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends the request and returns the raw body of a 2xx response.
    async fn send(&self, url: String, builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let builder = match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: e,
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            let errors = serde_json::from_slice::<ErrorBody>(&body)
                .map(|b| b.errors)
                .unwrap_or_default();
            tracing::debug!(%url, status = status.as_u16(), ?errors, "API request rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                errors,
            });
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl StudentService for HttpStudentService {
    async fn fetch(&self, id: &StudentId) -> Result<StudentRecord, ApiError> {
        let url = self.item_url(id);
        let builder = self.client.get(&url);
        self.execute(url, builder).await
    }

    async fn create(&self, payload: &StudentPayload) -> Result<StudentRecord, ApiError> {
        let url = self.collection_url();
        let builder = self.client.post(&url).json(payload);
        self.execute(url, builder).await
    }

    async fn update(&self, id: &StudentId, payload: &StudentPayload) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let builder = self.client.put(&url).json(payload);
        self.send(url, builder).await?;
        Ok(())
    }
}
