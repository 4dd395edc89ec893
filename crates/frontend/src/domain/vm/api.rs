use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::get_json;
use contracts::domain::vm::{VirtualMachine, VmPoolResponse, VmResponse};
use contracts::shared::error::ApiError;
use contracts::shared::selection::RowId;

pub async fn fetch_vm(ctx: AppGlobalContext, id: RowId) -> Result<VirtualMachine, ApiError> {
    let url = ctx.api_url(&format!("/vm/info/{}", id));
    let response: VmResponse = get_json(&url).await?;
    Ok(response.data.vm)
}

pub async fn fetch_vm_pool(ctx: AppGlobalContext) -> Result<Vec<VirtualMachine>, ApiError> {
    let url = ctx.api_url("/vmpool/info");
    let response: VmPoolResponse = get_json(&url).await?;
    Ok(response.data.vm_pool.vm)
}
