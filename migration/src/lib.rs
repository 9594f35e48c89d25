pub use sea_orm_migration::prelude::*;

mod m20251101_000001_create_teams_and_users;
mod m20251101_000002_create_pull_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_create_teams_and_users::Migration),
            Box::new(m20251101_000002_create_pull_requests::Migration),
        ]
    }
}
