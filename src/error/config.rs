use thiserror::Error;

/// Configuration problems detected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The requested access policy cannot be honored by this build.
    #[error("Unsupported access policy: {0}")]
    UnsupportedPolicy(String),
}
