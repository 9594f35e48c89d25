// User activity flag and review listings.

use entity::PrStatus;
use pr_reviewer::types::error::AppError;

mod common;
use common::{member, TestContext};

#[tokio::test]
async fn test_set_user_active_returns_projection() {
    let ctx = TestContext::new().await;
    ctx.seed_team("alpha", &[("u1", true), ("u2", true)]).await;

    let user = ctx.db.set_user_active("u2", false).await.unwrap();
    assert_eq!(user.user_id, "u2");
    assert_eq!(user.username, "User u2");
    assert_eq!(user.team_name.as_deref(), Some("alpha"));
    assert!(!user.is_active);

    let team = ctx.db.get_team_by_name("alpha").await.unwrap();
    assert_eq!(team.members[1], member("u2", false));

    let user = ctx.db.set_user_active("u2", true).await.unwrap();
    assert!(user.is_active);
}

#[tokio::test]
async fn test_set_user_active_unknown_user() {
    let ctx = TestContext::new().await;

    let result = ctx.db.set_user_active("ghost", true).await;
    assert!(matches!(result, Err(AppError::UserNotFound)));
}

#[tokio::test]
async fn test_teamless_user_has_no_team_name() {
    let ctx = TestContext::new().await;
    ctx.db.upsert_user(ctx.db.connection(), &member("loner", true)).await.unwrap();

    let user = ctx.db.set_user_active("loner", false).await.unwrap();
    assert_eq!(user.team_name, None);
}

#[tokio::test]
async fn test_reviews_for_user() {
    let ctx = TestContext::new().await;
    ctx.seed_team("beta", &[("u1", true), ("u2", true)]).await;

    ctx.engine.create_pr("pr-b", "Second", "u1").await.unwrap();
    ctx.engine.create_pr("pr-a", "First", "u1").await.unwrap();
    ctx.engine.merge_pr("pr-a").await.unwrap();

    let reviews = ctx.db.get_reviews_for_user("u2").await.unwrap();
    let ids: Vec<&str> = reviews.iter().map(|p| p.pull_request_id.as_str()).collect();
    assert_eq!(ids, vec!["pr-a", "pr-b"]);
    assert_eq!(reviews[0].status, PrStatus::Merged);
    assert_eq!(reviews[0].pull_request_name, "First");
    assert_eq!(reviews[1].status, PrStatus::Open);
    assert_eq!(reviews[1].author_id, "u1");

    // authors do not review their own work, strangers review nothing
    assert!(ctx.db.get_reviews_for_user("u1").await.unwrap().is_empty());
    assert!(ctx.db.get_reviews_for_user("nobody").await.unwrap().is_empty());
}
