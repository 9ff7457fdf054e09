use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_INVITATION_EXPIRES_DAYS: i64 = 7;
const DEFAULT_CLAIM_RATE_LIMIT_PER_SECOND: u64 = 2;
const DEFAULT_CLAIM_RATE_LIMIT_BURST: u32 = 5;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    /// Default invitation lifetime when the request does not specify one.
    pub invitation_expires_days: i64,
    /// When true, issuing a new invitation for a seat expires prior unclaimed
    /// invitations for that seat.
    pub revoke_prior_invitations: bool,

    /// Claim endpoint rate limit: seconds to replenish one request.
    pub claim_rate_limit_per_second: u64,
    /// Claim endpoint rate limit: burst capacity per client.
    pub claim_rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: optional("LISTEN_ADDR", DEFAULT_LISTEN_ADDR.to_string()),
            invitation_expires_days: parsed(
                "INVITATION_EXPIRES_DAYS",
                DEFAULT_INVITATION_EXPIRES_DAYS,
            )?,
            revoke_prior_invitations: parsed("REVOKE_PRIOR_INVITATIONS", false)?,
            claim_rate_limit_per_second: parsed(
                "CLAIM_RATE_LIMIT_PER_SECOND",
                DEFAULT_CLAIM_RATE_LIMIT_PER_SECOND,
            )?,
            claim_rate_limit_burst: parsed(
                "CLAIM_RATE_LIMIT_BURST",
                DEFAULT_CLAIM_RATE_LIMIT_BURST,
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: String) -> String {
    std::env::var(name).unwrap_or(default)
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
