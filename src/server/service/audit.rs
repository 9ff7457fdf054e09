//! Fire-and-forget audit logging.
//!
//! Every sensitive action (invitation issued, seat claimed, form confirmed)
//! leaves an audit record. The sink is strictly best-effort: a failed write is
//! logged server-side and swallowed, so audit problems can never abort or roll
//! back the action being recorded. Records are written after the action's
//! transaction has committed.

use sea_orm::DatabaseConnection;

use crate::server::data::audit::AuditLogRepository;

pub struct AuditLogger<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogger<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit record, swallowing any failure.
    ///
    /// # Arguments
    /// - `actor`: Who performed the action ("instructor:3", "student")
    /// - `action`: Action name ("invitation.created", "seat.claimed", ...)
    /// - `entity_type`/`entity_id`: The entity the action touched
    /// - `metadata`: Structured detail, stored as JSON
    pub async fn log(
        &self,
        actor: &str,
        action: &str,
        entity_type: &str,
        entity_id: i32,
        metadata: serde_json::Value,
    ) {
        let result = AuditLogRepository::new(self.db)
            .insert(
                actor.to_string(),
                action.to_string(),
                entity_type.to_string(),
                entity_id,
                metadata.to_string(),
            )
            .await;

        if let Err(err) = result {
            tracing::warn!("Audit log write failed for {}: {}", action, err);
        }
    }
}
