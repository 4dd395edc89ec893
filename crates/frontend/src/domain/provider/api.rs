use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::{get_json, post_json, put_json};
use contracts::shared::error::ApiError;
use serde_json::Value;

/// `GET /provider/{id}`: the stored document, as sent by the API.
pub async fn fetch_provider(ctx: AppGlobalContext, id: &str) -> Result<Value, ApiError> {
    get_json(&ctx.api_url(&format!("/provider/{}", id))).await
}

/// `POST /provider/create`. Returns the API answer (the new document id).
pub async fn create_provider(ctx: AppGlobalContext, payload: &Value) -> Result<Value, ApiError> {
    post_json(&ctx.api_url("/provider/create"), payload).await
}

/// `PUT /provider/update/{id}`
pub async fn update_provider(ctx: AppGlobalContext, id: &str, payload: &Value) -> Result<(), ApiError> {
    put_json(&ctx.api_url(&format!("/provider/update/{}", id)), payload).await
}
