use actix_web::{post, web};
use std::sync::Arc;
use crate::routes::required;
use crate::services::assignment::AssignmentService;
use crate::types::pull_request::{RPullRequestReassign, Reassignment};
use crate::types::response::{ApiResponse, ApiResult};

#[post("/reassign")]
pub async fn reassign(
    _req: actix_web::HttpRequest,
    engine: web::Data<Arc<AssignmentService>>,
    data: web::Json<RPullRequestReassign>,
) -> ApiResult<Reassignment> {
    required(&data.pull_request_id, "pull_request_id")?;
    required(&data.old_reviewer_id, "old_reviewer_id")?;

    let reassignment = engine
        .reassign(&data.pull_request_id, &data.old_reviewer_id)
        .await?;

    Ok(ApiResponse::Ok(reassignment))
}
