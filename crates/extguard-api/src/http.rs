//! reqwest-backed gateway

use async_trait::async_trait;
use extguard_core::types::{CustomExtensionCreate, FixedExtensionUpdate};
use extguard_core::{ApiConfig, CustomExtension, ErrorBody, FixedExtension};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::gateway::ExtensionGateway;
use crate::API_PREFIX;

/// Gateway speaking JSON over HTTP to the blocklist backend
#[derive(Debug, Clone)]
pub struct HttpGateway {
    /// HTTP client
    client: reqwest::Client,

    /// Backend root; API routes are appended to its path
    base_url: Url,
}

impl HttpGateway {
    /// Create a gateway from connection settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|_| ApiError::invalid_url(&config.base_url))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::invalid_url(&config.base_url));
        }

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()
            .map_err(|source| ApiError::Transport {
                method: "INIT".to_string(),
                path: config.base_url.clone(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are built from
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/api/extensions/<segments..>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_url(self.base_url.as_str()))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    /// Send a request, turning transport failures and non-2xx statuses into errors
    async fn execute(&self, method: Method, url: Url, request: RequestBuilder) -> Result<Response> {
        let path = url.path().to_string();
        debug!("{} {}", method, path);

        let response = request.send().await.map_err(|source| {
            warn!("{} {} failed: {}", method, path, source);
            ApiError::Transport {
                method: method.to_string(),
                path: path.clone(),
                source,
            }
        })?;

        let status = response.status();
        if status.is_success() {
            debug!("{} {} -> {}", method, path, status);
            return Ok(response);
        }

        // Body shape is irrelevant to the failure itself; decode it only as extra context.
        let body = response
            .bytes()
            .await
            .ok()
            .and_then(|bytes| ErrorBody::from_slice(&bytes));
        warn!(
            "{} {} -> {} ({})",
            method,
            path,
            status,
            body.as_ref().and_then(ErrorBody::message).unwrap_or("no message")
        );

        Err(ApiError::Status {
            method: method.to_string(),
            path,
            status,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(method: &Method, response: Response) -> Result<T> {
        let path = response.url().path().to_string();
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode {
                method: method.to_string(),
                path,
                source,
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments)?;
        let request = self.client.get(url.clone());
        let response = self.execute(Method::GET, url, request).await?;
        Self::decode(&Method::GET, response).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<()> {
        let url = self.endpoint(segments)?;
        let request = self.client.delete(url.clone());
        self.execute(Method::DELETE, url, request).await?;
        Ok(())
    }
}

#[async_trait]
impl ExtensionGateway for HttpGateway {
    async fn list_fixed(&self) -> Result<Vec<FixedExtension>> {
        self.get_json(&["fixed"]).await
    }

    async fn set_fixed_blocked(&self, name: &str, blocked: bool) -> Result<()> {
        let url = self.endpoint(&["fixed", name])?;
        let request = self
            .client
            .patch(url.clone())
            .json(&FixedExtensionUpdate { blocked });
        self.execute(Method::PATCH, url, request).await?;
        Ok(())
    }

    async fn set_fixed_blocked_by_id(&self, id: i64, blocked: bool) -> Result<FixedExtension> {
        let id = id.to_string();
        let url = self.endpoint(&["fixed", &id])?;
        let request = self
            .client
            .put(url.clone())
            .json(&FixedExtensionUpdate { blocked });
        let response = self.execute(Method::PUT, url, request).await?;
        Self::decode(&Method::PUT, response).await
    }

    async fn list_custom(&self) -> Result<Vec<CustomExtension>> {
        self.get_json(&["custom"]).await
    }

    async fn create_custom(&self, extension: &str) -> Result<CustomExtension> {
        let url = self.endpoint(&["custom"])?;
        let request = self.client.post(url.clone()).json(&CustomExtensionCreate {
            extension: extension.to_string(),
        });
        let response = self.execute(Method::POST, url, request).await?;
        Self::decode(&Method::POST, response).await
    }

    async fn delete_custom(&self, extension: &str) -> Result<()> {
        self.delete(&["custom", extension]).await
    }

    async fn delete_custom_by_id(&self, id: i64) -> Result<()> {
        let id = id.to_string();
        self.delete(&["custom", "id", &id]).await
    }

    async fn custom_count(&self) -> Result<u64> {
        self.get_json(&["custom", "count"]).await
    }
}
