use actix_web::{get, web};
use std::sync::Arc;
use crate::db::postgres_service::PostgresService;
use crate::routes::required;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{QGetReview, UserReviewsRes};

#[get("/getReview")]
pub async fn get_review(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<QGetReview>,
) -> ApiResult<UserReviewsRes> {
    required(&query.user_id, "user_id")?;

    let pull_requests = db.get_reviews_for_user(&query.user_id).await?;

    Ok(ApiResponse::Ok(UserReviewsRes {
        user_id: query.into_inner().user_id,
        pull_requests,
    }))
}
