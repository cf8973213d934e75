use std::env;
use chrono::Duration;

const DEFAULT_SECRET: &str = "default-secret-key";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }

    pub fn default_database_url(&self) -> &'static str {
        match self {
            Environment::Development => "sqlite://development.db",
            Environment::Testing => "sqlite://testing.db",
            Environment::Production => "sqlite://production.db",
        }
    }

    pub fn default_token_minutes(&self) -> i64 {
        match self {
            Environment::Development => 24 * 60,
            Environment::Testing => 5,
            Environment::Production => 60,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub port: u16,
    pub jwt_secret_key: String,
    pub access_token_ttl: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let environment = Environment::parse(&env::var("APP_ENV").unwrap_or_default());

        let jwt_secret_key = env::var("JWT_SECRET_KEY")
            .or_else(|_| env::var("SECRET_KEY"))
            .unwrap_or_else(|_| {
                tracing::warn!("JWT_SECRET_KEY not set, falling back to the built-in development secret");
                DEFAULT_SECRET.to_string()
            });

        let token_minutes = env::var("JWT_ACCESS_TOKEN_MINUTES")
            .ok()
            .map(|v| v.parse::<i64>().expect("JWT_ACCESS_TOKEN_MINUTES must be a number"))
            .unwrap_or_else(|| environment.default_token_minutes());

        Self {
            environment,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| environment.default_database_url().to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse().expect("PORT must be a number"),
            jwt_secret_key,
            access_token_ttl: Duration::minutes(token_minutes),
            cors_allowed_origins: parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_profiles() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse(" Testing "), Environment::Testing);
        assert_eq!(Environment::parse(""), Environment::Development);
        assert_eq!(Environment::parse("anything-else"), Environment::Development);

        assert_eq!(Environment::Development.default_token_minutes(), 1440);
        assert_eq!(Environment::Testing.default_token_minutes(), 5);
        assert_eq!(Environment::Production.default_token_minutes(), 60);
        assert_eq!(Environment::Testing.default_database_url(), "sqlite://testing.db");
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://localhost:3000, ,http://127.0.0.1:5173,");
        assert_eq!(origins, vec!["http://localhost:3000", "http://127.0.0.1:5173"]);
        assert!(parse_origins("").is_empty());
    }
}
