use actix_web::{post, web};
use std::sync::Arc;
use crate::routes::required;
use crate::services::assignment::AssignmentService;
use crate::types::pull_request::{PullRequestRes, RPullRequestCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/create")]
pub async fn create(
    _req: actix_web::HttpRequest,
    engine: web::Data<Arc<AssignmentService>>,
    data: web::Json<RPullRequestCreate>,
) -> ApiResult<PullRequestRes> {
    required(&data.pull_request_id, "pull_request_id")?;
    required(&data.pull_request_name, "pull_request_name")?;
    required(&data.author_id, "author_id")?;

    let pr = engine
        .create_pr(&data.pull_request_id, &data.pull_request_name, &data.author_id)
        .await?;

    Ok(ApiResponse::Created(PullRequestRes { pr }))
}
