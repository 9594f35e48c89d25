//! PR creation, merge and reviewer reassignment.
//!
//! Each operation runs in a single transaction. Transactions roll back when
//! dropped uncommitted, so every early return below leaves the store as it
//! was. Merge and reassign take the PR row lock before anything else.

use std::sync::Arc;

use entity::PrStatus;
use tracing::{debug, info};

use crate::db::postgres_service::{on_unique_violation, PostgresService};
use crate::db::pull_request::CandidateFilter;
use crate::services::selection::ReviewerPicker;
use crate::types::error::AppError;
use crate::types::pull_request::{PullRequest, Reassignment};

/// Reviewers assigned when a PR is opened.
pub const INITIAL_REVIEWER_COUNT: usize = 2;

#[derive(Clone)]
pub struct AssignmentService {
    db: Arc<PostgresService>,
    picker: Arc<dyn ReviewerPicker>,
}

impl AssignmentService {
    pub fn new(db: Arc<PostgresService>, picker: Arc<dyn ReviewerPicker>) -> Self {
        AssignmentService { db, picker }
    }

    pub async fn create_pr(&self, pr_id: &str, title: &str, author_id: &str) -> Result<PullRequest, AppError> {
        let txn = self.db.begin().await?;

        if self.db.pr_exists(&txn, pr_id).await? {
            debug!(pr = pr_id, "create rejected: id taken");
            return Err(AppError::PrExists);
        }

        if !self.db.user_exists(&txn, author_id).await? {
            return Err(AppError::AuthorMissing);
        }
        let team = self
            .db
            .user_team(&txn, author_id)
            .await?
            .ok_or(AppError::AuthorMissing)?;

        // a concurrent create with the same id either shows up in the check
        // above or fails here on the primary key
        self.db
            .insert_pull_request(&txn, pr_id, title, author_id, &team)
            .await
            .map_err(|e| on_unique_violation(e, AppError::PrExists))?;

        // inactive members are eligible here, only reassignment filters them
        let candidates = self
            .db
            .candidate_reviewers(&txn, &team, &[author_id.to_owned()], CandidateFilter::AnyMember)
            .await?;
        for reviewer in self.picker.pick(&candidates, INITIAL_REVIEWER_COUNT) {
            self.db.add_reviewer(&txn, pr_id, &reviewer).await?;
        }

        let pr = self
            .db
            .load_pull_request(&txn, pr_id)
            .await?
            .ok_or(AppError::PrNotFound)?;
        txn.commit().await?;

        info!(pr = pr_id, team = %team, reviewers = ?pr.assigned_reviewers, "pull request created");
        Ok(pr)
    }

    /// Merging a merged PR is a no-op, not an error.
    pub async fn merge_pr(&self, pr_id: &str) -> Result<PullRequest, AppError> {
        let txn = self.db.begin().await?;

        let locked = self
            .db
            .lock_pull_request(&txn, pr_id)
            .await?
            .ok_or(AppError::PrNotFound)?;

        let transitioned = locked.status != PrStatus::Merged;
        if transitioned {
            self.db.set_pr_merged(&txn, locked).await?;
        } else {
            debug!(pr = pr_id, "already merged");
        }

        let pr = self
            .db
            .load_pull_request(&txn, pr_id)
            .await?
            .ok_or(AppError::PrNotFound)?;
        txn.commit().await?;

        if transitioned {
            info!(pr = pr_id, "pull request merged");
        }
        Ok(pr)
    }

    /// Swaps `old_reviewer_id` for a random active team member who is neither
    /// the author nor already reviewing.
    pub async fn reassign(&self, pr_id: &str, old_reviewer_id: &str) -> Result<Reassignment, AppError> {
        let txn = self.db.begin().await?;

        let locked = self
            .db
            .lock_pull_request(&txn, pr_id)
            .await?
            .ok_or(AppError::PrNotFound)?;

        if locked.status == PrStatus::Merged {
            debug!(pr = pr_id, "reassign rejected: merged");
            return Err(AppError::PrMerged);
        }

        let current = self.db.assigned_reviewers(&txn, pr_id).await?;
        if !current.iter().any(|r| r == old_reviewer_id) {
            return Err(AppError::NotAssigned);
        }

        let mut exclude = current;
        exclude.push(locked.author_id.clone());
        let candidates = self
            .db
            .candidate_reviewers(&txn, &locked.team_name, &exclude, CandidateFilter::ActiveOnly)
            .await?;

        let Some(replacement) = self.picker.pick_one(&candidates) else {
            debug!(pr = pr_id, team = %locked.team_name, "reassign rejected: no candidate");
            return Err(AppError::NoCandidate);
        };

        self.db.remove_reviewer(&txn, pr_id, old_reviewer_id).await?;
        self.db.add_reviewer(&txn, pr_id, &replacement).await?;

        let pr = self
            .db
            .load_pull_request(&txn, pr_id)
            .await?
            .ok_or(AppError::PrNotFound)?;
        txn.commit().await?;

        info!(pr = pr_id, old = old_reviewer_id, new = %replacement, "reviewer reassigned");
        Ok(Reassignment {
            pr,
            replaced_by: replacement,
        })
    }
}
