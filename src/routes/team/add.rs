use actix_web::{post, web};
use std::sync::Arc;
use crate::db::postgres_service::PostgresService;
use crate::routes::required;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{RTeamAdd, TeamRes};

#[post("/add")]
pub async fn add_team(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    data: web::Json<RTeamAdd>,
) -> ApiResult<TeamRes> {
    required(&data.team_name, "team_name")?;

    let team = db.create_team(&data.team_name, &data.members).await?;

    Ok(ApiResponse::Created(TeamRes { team }))
}
