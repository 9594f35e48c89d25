use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod pull_request;
pub mod team;
pub mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/team")
            .service(team::add::add_team)
            .service(team::get::get_team),
    );
    cfg.service(
        web::scope("/users")
            .service(users::set_is_active::set_is_active)
            .service(users::get_review::get_review),
    );
    cfg.service(
        web::scope("/pullRequest")
            .service(pull_request::create::create)
            .service(pull_request::merge::merge)
            .service(pull_request::reassign::reassign),
    );
}

pub(crate) fn required(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}
