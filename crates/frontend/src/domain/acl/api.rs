use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::get_json;
use contracts::domain::acl::{Acl, AclPoolResponse};
use contracts::shared::error::ApiError;

pub async fn fetch_acls(ctx: AppGlobalContext) -> Result<Vec<Acl>, ApiError> {
    let response: AclPoolResponse = get_json(&ctx.api_url("/acl/info")).await?;
    Ok(response.data.acl_pool.acl)
}
