use std::time::Duration;

use crate::{ApiError, FailureKind, GenerateRequest, GenerationResult};

/// Connection settings for the generation backend.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Generating up to ten articles with inter-article delays can take
    /// minutes, so the request timeout is generous.
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(600),
        }
    }
}

#[async_trait::async_trait]
pub trait GenerateApi: Send + Sync {
    /// Submits one generation request and returns the ordered result list.
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<GenerationResult>, ApiError>;

    /// Stores one article pair on the server; returns the updated record.
    async fn save_article(
        &self,
        original: &str,
        replaced: &str,
        article_number: u32,
    ) -> Result<GenerationResult, ApiError>;

    /// Probes the backend's health endpoint.
    async fn health(&self) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    settings: ClientSettings,
}

impl ReqwestApiClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let mut base = self.settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = reqwest::Url::parse(&base)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
        base.join(path)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl GenerateApi for ReqwestApiClient {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<GenerationResult>, ApiError> {
        let client = self.build_client()?;
        let url = self.endpoint("api/generate")?;

        let response = client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The backend reports whole-job failures as a well-formed result list
        // under a 5xx status, so the body is decoded regardless of status and
        // the status only matters when the body is not a result list.
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        match serde_json::from_slice::<Vec<GenerationResult>>(&bytes) {
            Ok(results) => Ok(results),
            Err(_) if !status.is_success() => Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )),
            Err(err) => Err(ApiError::new(FailureKind::InvalidResponse, err.to_string())),
        }
    }

    async fn save_article(
        &self,
        original: &str,
        replaced: &str,
        article_number: u32,
    ) -> Result<GenerationResult, ApiError> {
        let client = self.build_client()?;
        let url = self.endpoint("api/save")?;
        let number = article_number.to_string();
        let params = [
            ("original", original),
            ("replaced", replaced),
            ("number", number.as_str()),
        ];

        let response = client
            .post(url)
            .form(&params)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        match serde_json::from_slice::<GenerationResult>(&bytes) {
            Ok(result) => Ok(result),
            Err(_) if !status.is_success() => Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            )),
            Err(err) => Err(ApiError::new(FailureKind::InvalidResponse, err.to_string())),
        }
    }

    async fn health(&self) -> Result<String, ApiError> {
        let client = self.build_client()?;
        let url = self.endpoint("api/health")?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        response
            .text()
            .await
            .map_err(|err| ApiError::new(FailureKind::InvalidResponse, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
