use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

pub struct AuditLogRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AuditLogRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Appends an audit record.
    ///
    /// # Arguments
    /// - `actor`: Who performed the action ("instructor:3", "student", ...)
    /// - `action`: Action name ("invitation.created", "seat.claimed", ...)
    /// - `entity_type`/`entity_id`: The entity the action touched
    /// - `metadata`: JSON-encoded detail blob
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored record
    /// - `Err(DbErr)`: Database error
    pub async fn insert(
        &self,
        actor: String,
        action: String,
        entity_type: String,
        entity_id: i32,
        metadata: String,
    ) -> Result<entity::audit_log::Model, DbErr> {
        entity::audit_log::ActiveModel {
            id: ActiveValue::NotSet,
            actor: ActiveValue::Set(actor),
            action: ActiveValue::Set(action),
            entity_type: ActiveValue::Set(entity_type),
            entity_id: ActiveValue::Set(entity_id),
            metadata: ActiveValue::Set(metadata),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }
}
