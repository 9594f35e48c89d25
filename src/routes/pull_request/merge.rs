use actix_web::{post, web};
use std::sync::Arc;
use crate::routes::required;
use crate::services::assignment::AssignmentService;
use crate::types::pull_request::{PullRequestRes, RPullRequestMerge};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/merge")]
pub async fn merge(
    _req: actix_web::HttpRequest,
    engine: web::Data<Arc<AssignmentService>>,
    data: web::Json<RPullRequestMerge>,
) -> ApiResult<PullRequestRes> {
    required(&data.pull_request_id, "pull_request_id")?;

    let pr = engine.merge_pr(&data.pull_request_id).await?;

    Ok(ApiResponse::Ok(PullRequestRes { pr }))
}
