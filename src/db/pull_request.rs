use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::PullRequest;
use chrono::Utc;
use entity::pr_reviewer::{ActiveModel as ReviewerActive, Entity as PrReviewer};
use entity::pull_request::{ActiveModel as PrActive, Entity as Pr, Model as PrModel};
use entity::team_member::Entity as Membership;
use entity::user::Entity as User;
use entity::PrStatus;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// Which team members may be drawn as reviewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateFilter {
    /// Every member, active or not. Used for the initial assignment.
    AnyMember,
    /// Active members only. Used when replacing a reviewer.
    ActiveOnly,
}

impl PostgresService {
    pub async fn pr_exists<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<bool, AppError> {
        Ok(Pr::find_by_id(id.to_owned()).count(conn).await? > 0)
    }

    /// Plain insert with status OPEN. Uniqueness is the caller's business.
    pub async fn insert_pull_request<C: ConnectionTrait>(
        &self,
        conn: &C,
        id: &str,
        title: &str,
        author_id: &str,
        team_name: &str,
    ) -> Result<(), sea_orm::DbErr> {
        Pr::insert(PrActive {
            id: Set(id.to_owned()),
            title: Set(title.to_owned()),
            author_id: Set(author_id.to_owned()),
            team_name: Set(team_name.to_owned()),
            status: Set(PrStatus::Open),
            created_at: Set(Utc::now()),
            merged_at: Set(None),
        })
        .exec(conn)
        .await?;
        Ok(())
    }

    /// `SELECT ... FOR UPDATE` on the PR row. The lock lives until the
    /// surrounding transaction ends, so `conn` must be a transaction.
    pub async fn lock_pull_request<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<Option<PrModel>, AppError> {
        Ok(Pr::find_by_id(id.to_owned())
            .lock_exclusive()
            .one(conn)
            .await?)
    }

    pub async fn set_pr_merged<C: ConnectionTrait>(&self, conn: &C, pr: PrModel) -> Result<PrModel, AppError> {
        let mut am: PrActive = pr.into();
        am.status = Set(PrStatus::Merged);
        am.merged_at = Set(Some(Utc::now()));
        Ok(am.update(conn).await?)
    }

    /// Members of `team_name` that are not in `exclude`, sorted by id.
    pub async fn candidate_reviewers<C: ConnectionTrait>(
        &self,
        conn: &C,
        team_name: &str,
        exclude: &[String],
        filter: CandidateFilter,
    ) -> Result<Vec<String>, AppError> {
        let mut query = Membership::find()
            .select_only()
            .column(entity::team_member::Column::UserId)
            .filter(entity::team_member::Column::TeamName.eq(team_name))
            .filter(entity::team_member::Column::UserId.is_not_in(exclude.iter().cloned()));

        if filter == CandidateFilter::ActiveOnly {
            query = query
                .inner_join(User)
                .filter(entity::user::Column::IsActive.eq(true));
        }

        Ok(query
            .order_by_asc(entity::team_member::Column::UserId)
            .into_tuple::<String>()
            .all(conn)
            .await?)
    }

    pub async fn add_reviewer<C: ConnectionTrait>(&self, conn: &C, pr_id: &str, user_id: &str) -> Result<(), AppError> {
        PrReviewer::insert(ReviewerActive {
            pr_id: Set(pr_id.to_owned()),
            user_id: Set(user_id.to_owned()),
        })
        .exec(conn)
        .await?;
        Ok(())
    }

    /// Returns how many links were removed (0 or 1).
    pub async fn remove_reviewer<C: ConnectionTrait>(&self, conn: &C, pr_id: &str, user_id: &str) -> Result<u64, AppError> {
        let res = PrReviewer::delete_many()
            .filter(entity::pr_reviewer::Column::PrId.eq(pr_id))
            .filter(entity::pr_reviewer::Column::UserId.eq(user_id))
            .exec(conn)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn assigned_reviewers<C: ConnectionTrait>(&self, conn: &C, pr_id: &str) -> Result<Vec<String>, AppError> {
        Ok(PrReviewer::find()
            .filter(entity::pr_reviewer::Column::PrId.eq(pr_id))
            .order_by_asc(entity::pr_reviewer::Column::UserId)
            .all(conn)
            .await?
            .into_iter()
            .map(|r| r.user_id)
            .collect())
    }

    pub async fn load_pull_request<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<Option<PullRequest>, AppError> {
        let Some(model) = Pr::find_by_id(id.to_owned()).one(conn).await? else {
            return Ok(None);
        };
        let reviewers = self.assigned_reviewers(conn, id).await?;
        Ok(Some(PullRequest::from_model(model, reviewers)))
    }

    pub async fn get_pull_request(&self, id: &str) -> Result<PullRequest, AppError> {
        self.load_pull_request(&self.database_connection, id)
            .await?
            .ok_or(AppError::PrNotFound)
    }
}
