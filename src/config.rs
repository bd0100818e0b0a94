use crate::error::{config::ConfigError, AppError};

/// Deliberate "open access" posture of the catalog API.
///
/// The service ships without authentication and with all origins permitted.
/// That is a policy, not an omission, so it is carried as an explicit,
/// named configuration object instead of a silent default. Authentication
/// is not implemented, which is why `ALLOW_ANONYMOUS=false` is refused at
/// startup rather than ignored.
#[derive(Debug, Clone, Copy)]
pub struct AccessPolicy {
    /// All requests are served without authentication.
    pub allow_anonymous: bool,
    /// CORS accepts any origin (no credentials).
    pub allow_all_origins: bool,
}

impl AccessPolicy {
    pub fn from_env() -> Result<Self, AppError> {
        let allow_anonymous = env_flag("ALLOW_ANONYMOUS", true);
        let allow_all_origins = env_flag("ALLOW_ALL_ORIGINS", true);

        if !allow_anonymous {
            return Err(ConfigError::UnsupportedPolicy(
                "authentication is not implemented; ALLOW_ANONYMOUS must remain true".to_string(),
            )
            .into());
        }

        Ok(Self {
            allow_anonymous,
            allow_all_origins,
        })
    }
}

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub access: AccessPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8080),
            access: AccessPolicy::from_env()?,
        })
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        Err(_) => default,
    }
}
