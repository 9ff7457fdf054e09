use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_INSTRUCTOR_ID,
    data::instructor::InstructorRepository,
    error::{auth::AuthError, AppError},
};

/// Session-backed authentication guard for instructor endpoints.
///
/// Resolves the instructor id stored in the session to a live database row.
/// Handlers call `require()` first and work with the returned instructor;
/// resource-level ownership checks stay in the services.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated instructor.
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated instructor
    /// - `Err(AuthError::NotLoggedIn)`: No instructor id in the session
    /// - `Err(AuthError::InstructorNotInDatabase)`: Session references a
    ///   deleted account
    pub async fn require(&self) -> Result<entity::instructor::Model, AppError> {
        let Some(instructor_id) = self
            .session
            .get::<i32>(SESSION_AUTH_INSTRUCTOR_ID)
            .await?
        else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(instructor) = InstructorRepository::new(self.db)
            .find_by_id(instructor_id)
            .await?
        else {
            return Err(AuthError::InstructorNotInDatabase(instructor_id).into());
        };

        Ok(instructor)
    }
}
