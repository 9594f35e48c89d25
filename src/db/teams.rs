use crate::db::postgres_service::{on_unique_violation, PostgresService};
use crate::types::error::AppError;
use crate::types::team::{Team, TeamMember};
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Entity as TeamEntity};
use entity::team_member::{ActiveModel as MemberActive, Entity as Membership};
use entity::user::Entity as User;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::BTreeMap;
use tracing::info;

impl PostgresService {
    pub async fn team_exists<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<bool, AppError> {
        Ok(TeamEntity::find_by_id(name.to_owned()).count(conn).await? > 0)
    }

    /// Creates the team, upserts every listed member and links them to it.
    ///
    /// All of it runs in one transaction: a failing member aborts the team too.
    /// Members already in another team are moved, a user has at most one team.
    /// When the same user id is listed twice the last entry wins. Members are
    /// written in user id order so concurrent creations sharing users lock
    /// their rows in the same order.
    pub async fn create_team(&self, name: &str, members: &[TeamMember]) -> Result<Team, AppError> {
        let txn = self.database_connection.begin().await?;

        if self.team_exists(&txn, name).await? {
            return Err(AppError::TeamExists);
        }

        TeamEntity::insert(TeamActive {
            name: Set(name.to_owned()),
            created_at: Set(Utc::now()),
        })
        .exec(&txn)
        .await
        .map_err(|e| on_unique_violation(e, AppError::TeamExists))?;

        let unique: BTreeMap<&str, &TeamMember> = members
            .iter()
            .filter(|m| !m.user_id.is_empty())
            .map(|m| (m.user_id.as_str(), m))
            .collect();
        for member in unique.into_values() {
            self.upsert_user(&txn, member).await?;
            self.move_user_to_team(&txn, &member.user_id, name).await?;
        }

        let team = self.load_team(&txn, name).await?.ok_or(AppError::TeamNotFound)?;
        txn.commit().await?;

        info!(team = name, members = team.members.len(), "team created");
        Ok(team)
    }

    pub async fn get_team_by_name(&self, name: &str) -> Result<Team, AppError> {
        self.load_team(&self.database_connection, name)
            .await?
            .ok_or(AppError::TeamNotFound)
    }

    pub async fn load_team<C: ConnectionTrait>(&self, conn: &C, name: &str) -> Result<Option<Team>, AppError> {
        if !self.team_exists(conn, name).await? {
            return Ok(None);
        }

        let members = User::find()
            .inner_join(Membership)
            .filter(entity::team_member::Column::TeamName.eq(name))
            .order_by_asc(entity::user::Column::Id)
            .all(conn)
            .await?
            .into_iter()
            .map(|u| TeamMember {
                user_id: u.id,
                username: u.name,
                is_active: u.is_active,
            })
            .collect();

        Ok(Some(Team {
            team_name: name.to_owned(),
            members,
        }))
    }

    async fn move_user_to_team<C: ConnectionTrait>(&self, conn: &C, user_id: &str, team: &str) -> Result<(), AppError> {
        Membership::delete_many()
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .exec(conn)
            .await?;

        Membership::insert(MemberActive {
            team_name: Set(team.to_owned()),
            user_id: Set(user_id.to_owned()),
        })
        .exec(conn)
        .await?;
        Ok(())
    }
}
