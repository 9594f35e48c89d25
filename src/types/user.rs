use serde::{Deserialize, Serialize};

use crate::types::pull_request::PullRequestShort;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub team_name: Option<String>,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSetIsActive {
    pub user_id: String,
    pub is_active: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QGetReview {
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserReviewsRes {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShort>,
}
