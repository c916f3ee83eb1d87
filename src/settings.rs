use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use sqlx::postgres::PgConnectOptions;
use jsonwebtoken::{DecodingKey, EncodingKey};
use std::{env, fmt, str::FromStr};
use zeroize::Zeroizing;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default)]
    pub db_name: Option<String>,

    #[serde(default)]
    pub db_user: Option<String>,

    #[serde(default)]
    pub db_password: Option<String>,

    #[serde(default = "default_db_host")]
    pub db_host: String,

    #[serde(default = "default_db_port")]
    pub db_port: u16,

    #[serde(default = "default_true")]
    pub run_migrations: bool,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration")]
    pub jwt_expiration_minutes: i64,

    #[serde(default = "default_refresh_expiration")]
    pub jwt_refresh_expiration_days: i64,

    /// OAuth client credentials. Loaded for parity with the social login
    /// setup; no handler consumes them yet.
    #[serde(default)]
    pub google_client_id: Option<String>,

    #[serde(default)]
    pub google_secret_key: Option<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "DevTeam-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_db_host() -> String {
    "127.0.0.1".to_string()
}
fn default_db_port() -> u16 {
    5432
}
fn default_true() -> bool {
    true
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_jwt_expiration() -> i64 {
    60 * 24
}
fn default_refresh_expiration() -> i64 {
    3
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .ignore_empty(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;
        config.jwt_secret = fill_or_env(config.jwt_secret, "APP_JWT_SECRET")?;
        config.connect_options()?;

        config.validate()?;
        Ok(config)
    }

    /// Prefers an explicit URL; otherwise builds the options from the `db_*`
    /// parts, so credentials are never spliced into a URL.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if !self.database_url.trim().is_empty() {
            return self
                .database_url
                .parse::<PgConnectOptions>()
                .map_err(|e| ConfigError::Message(format!("Invalid APP_DATABASE_URL: {e}")));
        }

        let name = self
            .db_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| ConfigError::Message("APP_DATABASE_URL or APP_DB_NAME must be set".into()))?;

        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(name);

        if let Some(user) = self.db_user.as_deref().filter(|u| !u.is_empty()) {
            options = options.username(user);
        }
        if let Some(password) = self.db_password.as_deref().filter(|p| !p.is_empty()) {
            options = options.password(password);
        }

        Ok(options)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.jwt_secret.len() < 32 {
            errors.push("JWT_SECRET must be at least 32 characters");
        }
        if self.jwt_expiration_minutes <= 0 {
            errors.push("JWT_EXPIRATION_MINUTES must be positive");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flat_map(|origin| origin.split(','))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else if self.len() < 32 {
            "[TOO_SHORT]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

fn redact_optional(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => "[REDACTED]",
        _ => "[MISSING]",
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &"[REDACTED]")
            .field("db_name", &self.db_name)
            .field("db_user", &self.db_user)
            .field("db_password", &redact_optional(&self.db_password))
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("run_migrations", &self.run_migrations)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &self.jwt_secret.redact())
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .field("jwt_refresh_expiration_days", &self.jwt_refresh_expiration_days)
            .field("google_client_id", &self.google_client_id)
            .field("google_secret_key", &redact_optional(&self.google_secret_key))
            .finish()
    }
}

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl From<&AppConfig> for JwtKeys {
    fn from(config: &AppConfig) -> Self {
        let jwt_secret = Zeroizing::new(config.jwt_secret.clone());

        JwtKeys {
            encoding: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }
}

impl fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtKeys")
            .field("encoding", &"[REDACTED]")
            .field("decoding", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "DevTeam-API".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: String::new(),
            db_name: None,
            db_user: None,
            db_password: None,
            db_host: "127.0.0.1".into(),
            db_port: 5432,
            run_migrations: false,
            cors_allowed_origins: vec!["*".into()],
            jwt_secret: "a_test_secret_that_is_definitely_long_enough".into(),
            jwt_expiration_minutes: 60,
            jwt_refresh_expiration_days: 3,
            google_client_id: None,
            google_secret_key: None,
        }
    }

    #[test]
    fn explicit_database_url_wins() {
        let mut config = base_config();
        config.database_url = "postgres://u@h/db".into();
        config.db_name = Some("other".into());

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "h");
        assert_eq!(options.get_database(), Some("db"));
    }

    #[test]
    fn connection_is_composed_from_parts() {
        let mut config = base_config();
        config.db_name = Some("devteam".into());
        config.db_user = Some("dev".into());
        config.db_port = 6543;

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "dev");
        assert_eq!(options.get_database(), Some("devteam"));
    }

    #[test]
    fn reserved_characters_in_password_do_not_change_the_target() {
        let mut config = base_config();
        config.db_name = Some("devteam".into());
        config.db_user = Some("dev".into());
        config.db_password = Some("p@ss/w:rd#1".into());

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "127.0.0.1");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "dev");
        assert_eq!(options.get_database(), Some("devteam"));
    }

    #[test]
    fn missing_database_name_is_an_error() {
        assert!(base_config().connect_options().is_err());
    }

    #[test]
    fn short_secret_and_production_wildcard_fail_validation() {
        let mut config = base_config();
        config.database_url = "postgres://u@h/db".into();
        assert!(config.validate().is_ok());

        config.jwt_secret = "short".into();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.database_url = "postgres://u@h/db".into();
        config.env = AppEnvironment::Production;
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let mut config = base_config();
        config.database_url = "postgres://user:hunter2@h/db".into();
        config.google_secret_key = Some("google-secret".into());

        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("google-secret"));
        assert!(!rendered.contains(&config.jwt_secret));
    }

    #[test]
    fn cors_origins_split_on_commas() {
        let mut config = base_config();
        config.cors_allowed_origins = vec!["http://a.test, http://b.test".into(), "".into()];
        assert_eq!(config.cors_origins(), vec!["http://a.test", "http://b.test"]);
    }
}
