use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Prs {
    Table,
    Id,
    Title,
    AuthorId,
    TeamName,
    Status,
    CreatedAt,
    MergedAt,
}

#[derive(DeriveIden)]
enum PrReviewers {
    Table,
    PrId,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Prs::Table)
                .if_not_exists()
                .col(ColumnDef::new(Prs::Id).string().not_null().primary_key())
                .col(ColumnDef::new(Prs::Title).string().not_null())
                .col(ColumnDef::new(Prs::AuthorId).string().not_null())
                .col(ColumnDef::new(Prs::TeamName).string().not_null())
                .col(ColumnDef::new(Prs::Status).string_len(16).not_null().default("OPEN"))
                .col(ColumnDef::new(Prs::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Prs::MergedAt).timestamp_with_time_zone().null())
                .check(Expr::col(Prs::Status).is_in(["OPEN", "MERGED"]))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_prs_author")
                        .from(Prs::Table, Prs::AuthorId)
                        .to(Users::Table, Users::Id)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(PrReviewers::Table)
                .if_not_exists()
                .col(ColumnDef::new(PrReviewers::PrId).string().not_null())
                .col(ColumnDef::new(PrReviewers::UserId).string().not_null())
                .primary_key(
                    Index::create()
                        .name("pk_pr_reviewers")
                        .col(PrReviewers::PrId)
                        .col(PrReviewers::UserId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_pr_reviewers_pr")
                        .from(PrReviewers::Table, PrReviewers::PrId)
                        .to(Prs::Table, Prs::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_pr_reviewers_user")
                        .from(PrReviewers::Table, PrReviewers::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // getReview looks up by reviewer
        m.create_index(
            Index::create()
                .name("idx_pr_reviewers_user")
                .table(PrReviewers::Table)
                .col(PrReviewers::UserId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(PrReviewers::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Prs::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
