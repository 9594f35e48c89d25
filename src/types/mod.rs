pub mod error;
pub mod pull_request;
pub mod response;
pub mod team;
pub mod user;
