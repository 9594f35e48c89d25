#![allow(dead_code)]

use std::sync::Arc;
use actix_web::{web, App};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use pr_reviewer::db::postgres_service::PostgresService;
use pr_reviewer::services::assignment::AssignmentService;
use pr_reviewer::services::selection::{RandomPicker, ReviewerPicker, SeededPicker};
use pr_reviewer::types::team::{Team, TeamMember};

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub engine: Arc<AssignmentService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::with_picker(Arc::new(RandomPicker)).await
    }

    pub async fn seeded(seed: u64) -> TestContext {
        Self::with_picker(Arc::new(SeededPicker::new(seed))).await
    }

    pub async fn with_picker(picker: Arc<dyn ReviewerPicker>) -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );
        let engine = Arc::new(AssignmentService::new(Arc::clone(&db), picker));

        TestContext {
            db,
            engine,
            _container: container,
        }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Arc::clone(&self.engine)))
            .configure(pr_reviewer::routes::configure_routes)
    }

    /// Creates `name` with the given `(user_id, is_active)` members.
    pub async fn seed_team(&self, name: &str, members: &[(&str, bool)]) -> Team {
        let members: Vec<TeamMember> = members
            .iter()
            .map(|(id, active)| member(id, *active))
            .collect();

        self.db
            .create_team(name, &members)
            .await
            .expect("Failed to seed team")
    }

    pub async fn reviewers(&self, pr_id: &str) -> Vec<String> {
        self.db
            .get_pull_request(pr_id)
            .await
            .expect("PR should exist")
            .assigned_reviewers
    }
}

/// Takes the first `n` candidates, which arrive sorted by user id.
pub struct FirstCandidates;

impl ReviewerPicker for FirstCandidates {
    fn pick(&self, candidates: &[String], n: usize) -> Vec<String> {
        candidates.iter().take(n).cloned().collect()
    }
}

/// Returns its ids whatever the candidates are, e.g. users that do not exist.
pub struct FixedPicker(pub Vec<String>);

impl ReviewerPicker for FixedPicker {
    fn pick(&self, _candidates: &[String], n: usize) -> Vec<String> {
        self.0.iter().take(n).cloned().collect()
    }
}

pub fn member(id: &str, is_active: bool) -> TeamMember {
    TeamMember {
        user_id: id.to_string(),
        username: format!("User {id}"),
        is_active,
    }
}
