use std::sync::Arc;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::ApiError;

/// Seam between the stores and the wire. Bodies travel as untyped JSON so
/// the trait stays object-safe; [`Api`] layers serde typing on top.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError>;
}

/// Error payload the server attaches to non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
    details: Option<String>,
}

/// Production transport: reqwest with the cookie store enabled, so the
/// session cookie issued at login rides along on every later request.
pub struct HttpTransport {
    client: reqwest::Client,
    base: String,
}

impl HttpTransport {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            // The body is best-effort: a gateway may answer with no JSON at all.
            let body: ErrorBody = resp.json().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                code: body.error,
                message: body.message.or(body.details),
            });
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        debug!(%path, "GET");
        let resp = self.client.get(self.url(path)).send().await?;
        Self::read_json(resp).await
    }

    async fn post_json(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        debug!(%path, "POST");
        let resp = self.client.post(self.url(path)).json(&body).send().await?;
        Self::read_json(resp).await
    }
}

/// Typed accessor handed to the stores. Cloning is cheap; all clones share
/// one transport (and therefore one cookie jar).
#[derive(Clone)]
pub struct Api {
    transport: Arc<dyn Transport>,
}

impl Api {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds the production accessor from configuration.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(&config.api_base)?)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.transport.get_json(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        let value = self.transport.post_json(path, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::SpyTransport;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_deserializes_into_the_requested_type() {
        let spy = SpyTransport::new();
        spy.push_ok(json!({"answer": 42}));
        let api = Api::new(spy.clone());

        #[derive(Debug, Deserialize, PartialEq)]
        struct Payload {
            answer: u32,
        }

        let payload: Payload = api.get("/v1/thing").await.expect("get should succeed");
        assert_eq!(payload, Payload { answer: 42 });
        assert_eq!(spy.paths(), vec!["/v1/thing"]);
    }

    #[tokio::test]
    async fn mismatched_body_yields_a_decode_error() {
        let spy = SpyTransport::new();
        spy.push_ok(json!({"answer": "not a number"}));
        let api = Api::new(spy);

        #[derive(Debug, Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            answer: u32,
        }

        let err = api.get::<Payload>("/v1/thing").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
