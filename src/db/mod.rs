pub mod postgres_service;
pub mod pull_request;
pub mod teams;
pub mod user;
