use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub db_max_connections: u32,
    /// How long a connection may take to deliver its request headers.
    /// Handlers and their transactions are not bounded by it.
    pub header_timeout: Duration,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        match env::var(key) {
            Ok(v) if !v.is_empty() => v,
            _ => default.to_string(),
        }
    }

    fn database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            if !url.is_empty() {
                return url;
            }
        }

        let user = Self::get_env_or("POSTGRES_USER", "pruser");
        let pass = Self::get_env_or("POSTGRES_PASSWORD", "prpass");
        let host = Self::get_env_or("DB_HOST", "db");
        let port = Self::get_env_or("DB_PORT", "5432");
        let db = Self::get_env_or("POSTGRES_DB", "pr_review");
        format!("postgres://{user}:{pass}@{host}:{port}/{db}")
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url: Self::database_url(),
            db_max_connections: Self::get_env_or("DB_MAX_CONNECTIONS", "10").parse().unwrap_or(10),
            header_timeout: Duration::from_secs(
                Self::get_env_or("HEADER_TIMEOUT_SECS", "5").parse().unwrap_or(5),
            ),
        }
    }
}
