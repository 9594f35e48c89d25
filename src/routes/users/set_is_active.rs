use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use crate::db::postgres_service::PostgresService;
use crate::routes::required;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RSetIsActive, UserRes};

#[post("/setIsActive")]
pub async fn set_is_active(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RSetIsActive>,
) -> ApiResult<UserRes> {
    required(&data.user_id, "user_id")?;

    let user = db.set_user_active(&data.user_id, data.is_active).await?;
    info!(user = %user.user_id, active = user.is_active, "user activity changed");

    Ok(ApiResponse::Ok(UserRes { user }))
}
