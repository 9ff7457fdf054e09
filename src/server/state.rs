//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It carries the database
//! connection pool plus the few configuration values the request path needs.

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool
/// (clones share the pool) and the rest are plain values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Default invitation lifetime in days for requests that omit one.
    pub invitation_expires_days: i64,

    /// Whether issuing a new invitation revokes prior unclaimed ones.
    pub revoke_prior_invitations: bool,
}

impl AppState {
    /// Creates the application state from the connected database and the
    /// loaded configuration.
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            invitation_expires_days: config.invitation_expires_days,
            revoke_prior_invitations: config.revoke_prior_invitations,
        }
    }
}
