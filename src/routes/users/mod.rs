pub mod get_review;
pub mod set_is_active;
