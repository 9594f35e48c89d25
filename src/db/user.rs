use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::pull_request::PullRequestShort;
use crate::types::team::TeamMember;
use crate::types::user::User as UserView;
use chrono::Utc;
use entity::pr_reviewer::Entity as PrReviewer;
use entity::pull_request::Entity as PullRequest;
use entity::team_member::Entity as Membership;
use entity::user::{ActiveModel as UserActive, Entity as User};
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl PostgresService {
    pub async fn user_exists<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<bool, AppError> {
        Ok(User::find_by_id(id.to_owned()).count(conn).await? > 0)
    }

    /// Insert, or refresh name and active flag of an existing user.
    pub async fn upsert_user<C: ConnectionTrait>(&self, conn: &C, member: &TeamMember) -> Result<(), AppError> {
        let now = Utc::now();
        User::insert(UserActive {
            id: Set(member.user_id.clone()),
            name: Set(member.username.clone()),
            is_active: Set(member.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Id)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::IsActive,
                    entity::user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(conn)
        .await?;
        Ok(())
    }

    /// The user's team, if any.
    pub async fn user_team<C: ConnectionTrait>(&self, conn: &C, id: &str) -> Result<Option<String>, AppError> {
        Ok(Membership::find()
            .filter(entity::team_member::Column::UserId.eq(id))
            .order_by_asc(entity::team_member::Column::TeamName)
            .one(conn)
            .await?
            .map(|m| m.team_name))
    }

    pub async fn set_user_active(&self, id: &str, is_active: bool) -> Result<UserView, AppError> {
        let txn = self.database_connection.begin().await?;

        let user = User::find_by_id(id.to_owned())
            .one(&txn)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let mut am: UserActive = user.into();
        am.is_active = Set(is_active);
        am.updated_at = Set(Utc::now());
        let user = am.update(&txn).await?;

        let team_name = self.user_team(&txn, id).await?;
        txn.commit().await?;

        Ok(UserView {
            user_id: user.id,
            username: user.name,
            team_name,
            is_active: user.is_active,
        })
    }

    /// PRs where the user is an assigned reviewer. Unknown users simply have none.
    pub async fn get_reviews_for_user(&self, user_id: &str) -> Result<Vec<PullRequestShort>, AppError> {
        Ok(PullRequest::find()
            .inner_join(PrReviewer)
            .filter(entity::pr_reviewer::Column::UserId.eq(user_id))
            .order_by_asc(entity::pull_request::Column::Id)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(PullRequestShort::from)
            .collect())
    }
}
