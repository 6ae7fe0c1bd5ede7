use reqwest::{Response, StatusCode};
use serde_json::{Map, Value};

use crate::{
    error::ErrorResponse,
    models::{Collection, Resource},
    views::FormError,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Invalid form: {0}")]
    Form(#[from] FormError),
}

/// HTTP client for the resource endpoints.
///
/// No retries and no timeouts: every call is a single request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url, collection.path())
    }

    /// Every document in a collection
    pub async fn list_documents(&self, collection: Collection) -> Result<Vec<Value>, ClientError> {
        let response = self.http.get(self.url(collection)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        let documents = self.list_documents(R::COLLECTION).await?;
        Ok(documents.iter().map(R::from_json).collect())
    }

    /// A single document, None when the server answers `null`
    pub async fn get_document(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Value>, ClientError> {
        let response = self
            .http
            .get(self.url(collection))
            .query(&[("id", id)])
            .send()
            .await?;

        match check(response).await?.json::<Value>().await? {
            Value::Null => Ok(None),
            document => Ok(Some(document)),
        }
    }

    pub async fn get<R: Resource>(&self, id: &str) -> Result<Option<R>, ClientError> {
        let document = self.get_document(R::COLLECTION, id).await?;
        Ok(document.as_ref().map(R::from_json))
    }

    /// Create a document and return it with its assigned id
    pub async fn create(
        &self,
        collection: Collection,
        fields: &Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let response = self.http.post(self.url(collection)).json(fields).send().await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: &Map<String, Value>,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .put(self.url(collection))
            .query(&[("id", id)])
            .json(fields)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }

    pub async fn delete(&self, collection: Collection, id: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(collection))
            .query(&[("id", id)])
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}

/// Turn a non-success status into `ClientError::Api`
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await?;
    let message = serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    tracing::warn!("Request failed with {}: {}", status, message);
    Err(ClientError::Api { status, message })
}
