use chrono::{DateTime, Utc};
use entity::PrStatus;
use serde::{Deserialize, Serialize};

/// The one PR projection handed out by create, merge and reassign.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub team_name: String,
    pub assigned_reviewers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn from_model(model: entity::pull_request::Model, assigned_reviewers: Vec<String>) -> Self {
        PullRequest {
            pull_request_id: model.id,
            pull_request_name: model.title,
            author_id: model.author_id,
            status: model.status,
            team_name: model.team_name,
            assigned_reviewers,
            created_at: model.created_at,
            merged_at: model.merged_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PullRequestShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

impl From<entity::pull_request::Model> for PullRequestShort {
    fn from(model: entity::pull_request::Model) -> Self {
        PullRequestShort {
            pull_request_id: model.id,
            pull_request_name: model.title,
            author_id: model.author_id,
            status: model.status,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reassignment {
    pub pr: PullRequest,
    pub replaced_by: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPullRequestCreate {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPullRequestMerge {
    pub pull_request_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RPullRequestReassign {
    pub pull_request_id: String,
    pub old_reviewer_id: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct PullRequestRes {
    pub pr: PullRequest,
}
