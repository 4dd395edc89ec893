//! API utilities for frontend-backend communication
//!
//! Thin wrappers over `gloo_net` that map every failure to [`ApiError`].
//! URLs are built with [`AppGlobalContext::api_url`].

use crate::layout::global_context::AppGlobalContext;
use contracts::shared::documents::{DocumentService, UpdateDocumentRequest};
use contracts::shared::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<serde_json::Value, ApiError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// The response body is ignored: update endpoints answer with the id only.
pub async fn put_json<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let request = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(&body, &response.status_text()),
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Message of an error body (`{"message": ...}` or `{"data": ...}`), the raw
/// text otherwise.
fn error_message(body: &str, fallback: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| v.get("message").or_else(|| v.get("data")))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| fallback.to_string())
}

/// Template updates through `PUT /{resource}/update/{id}`.
#[derive(Clone, Copy)]
pub struct HttpDocumentService {
    ctx: AppGlobalContext,
    resource: &'static str,
}

impl HttpDocumentService {
    pub fn new(ctx: AppGlobalContext, resource: &'static str) -> Self {
        Self { ctx, resource }
    }
}

impl DocumentService for HttpDocumentService {
    async fn update_document(&self, request: UpdateDocumentRequest) -> Result<(), ApiError> {
        let url = self
            .ctx
            .api_url(&format!("/{}/update/{}", self.resource, request.id));
        put_json(&url, &request.body()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"message":"[one.vm.update] denied"}"#, "Bad Request"), "[one.vm.update] denied");
        assert_eq!(error_message(r#"{"id":500,"data":"timeout"}"#, "Error"), "timeout");
        assert_eq!(error_message("plain text", "Error"), "plain text");
        assert_eq!(error_message("", "Not Found"), "Not Found");
    }
}
