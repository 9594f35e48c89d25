use actix_web::{get, web};
use std::sync::Arc;
use crate::db::postgres_service::PostgresService;
use crate::routes::required;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{QTeamGet, TeamRes};

#[get("/get")]
pub async fn get_team(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    query: web::Query<QTeamGet>,
) -> ApiResult<TeamRes> {
    required(&query.team_name, "team_name")?;

    let team = db.get_team_by_name(&query.team_name).await?;

    Ok(ApiResponse::Ok(TeamRes { team }))
}
