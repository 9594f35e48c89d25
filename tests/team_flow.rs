// Team creation and lookup through the persistence layer.

use pr_reviewer::types::error::AppError;

mod common;
use common::{member, TestContext};

#[tokio::test]
async fn test_team_creation_flow_success() {
    let ctx = TestContext::new().await;

    let team = ctx.seed_team("backend", &[("u2", true), ("u1", true), ("u3", false)]).await;
    assert_eq!(team.team_name, "backend");

    let ids: Vec<&str> = team.members.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2", "u3"]);
    assert_eq!(team.members[2], member("u3", false));

    let fetched = ctx.db.get_team_by_name("backend").await.unwrap();
    assert_eq!(fetched, team);
}

#[tokio::test]
async fn test_duplicate_team_name_keeps_original_roster() {
    let ctx = TestContext::new().await;
    let original = ctx.seed_team("backend", &[("u1", true), ("u2", true)]).await;

    let result = ctx
        .db
        .create_team("backend", &[member("u1", false), member("x9", true)])
        .await;
    assert!(matches!(result, Err(AppError::TeamExists)));

    assert_eq!(ctx.db.get_team_by_name("backend").await.unwrap(), original);
    // the rejected request did not leak its users either
    assert!(!ctx.db.user_exists(ctx.db.connection(), "x9").await.unwrap());
}

#[tokio::test]
async fn test_get_unknown_team() {
    let ctx = TestContext::new().await;

    let result = ctx.db.get_team_by_name("nope").await;
    assert!(matches!(result, Err(AppError::TeamNotFound)));
}

#[tokio::test]
async fn test_team_without_members() {
    let ctx = TestContext::new().await;

    let team = ctx.db.create_team("empty", &[]).await.unwrap();
    assert!(team.members.is_empty());
    assert!(ctx.db.team_exists(ctx.db.connection(), "empty").await.unwrap());
}

#[tokio::test]
async fn test_existing_user_is_updated_and_moved() {
    let ctx = TestContext::new().await;
    ctx.seed_team("backend", &[("u1", true), ("u2", true)]).await;

    let mut renamed = member("u2", false);
    renamed.username = "Renamed".to_string();
    let frontend = ctx.db.create_team("frontend", &[renamed.clone()]).await.unwrap();
    assert_eq!(frontend.members, vec![renamed]);

    let backend = ctx.db.get_team_by_name("backend").await.unwrap();
    assert_eq!(backend.members, vec![member("u1", true)]);

    let team = ctx.db.user_team(ctx.db.connection(), "u2").await.unwrap();
    assert_eq!(team.as_deref(), Some("frontend"));
}

#[tokio::test]
async fn test_blank_and_repeated_members() {
    let ctx = TestContext::new().await;

    let mut first = member("u1", true);
    first.username = "First".to_string();
    let mut last = member("u1", false);
    last.username = "Last".to_string();

    let team = ctx
        .db
        .create_team("ops", &[member("", true), first, last.clone()])
        .await
        .unwrap();
    assert_eq!(team.members, vec![last]);
}

#[tokio::test]
async fn test_concurrent_teams_sharing_users_both_commit() {
    let ctx = TestContext::new().await;

    for round in 0..5 {
        let (x, y) = (format!("x{round}"), format!("y{round}"));
        let (left, right) = (format!("left{round}"), format!("right{round}"));
        let forward = [member(&x, true), member(&y, true)];
        let backward = [member(&y, true), member(&x, true)];

        let (a, b) = futures::join!(
            ctx.db.create_team(&left, &forward),
            ctx.db.create_team(&right, &backward),
        );
        assert!(a.is_ok(), "{left}: {a:?}");
        assert!(b.is_ok(), "{right}: {b:?}");

        // whichever committed last owns both users
        let conn = ctx.db.connection();
        let x_team = ctx.db.user_team(conn, &x).await.unwrap();
        let y_team = ctx.db.user_team(conn, &y).await.unwrap();
        assert!(x_team.is_some());
        assert_eq!(x_team, y_team);
    }
}
