use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::RegisterDto,
    server::{
        data::instructor::InstructorRepository,
        error::{auth::AuthError, AppError},
    },
};

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new instructor account.
    ///
    /// # Arguments
    /// - `dto`: Name, email, and plaintext password
    ///
    /// # Returns
    /// - `Ok(Model)`: The created instructor
    /// - `Err(AppError)`: Invalid input, email already registered, or
    ///   database error
    pub async fn register(&self, dto: RegisterDto) -> Result<entity::instructor::Model, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if !dto.email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let repo = InstructorRepository::new(self.db);
        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(&dto.password)?;
        let instructor = repo.create(dto.name, dto.email, password_hash).await?;

        Ok(instructor)
    }

    /// Verifies login credentials.
    ///
    /// Unknown emails and wrong passwords produce the same error so login
    /// probing cannot tell accounts apart.
    ///
    /// # Returns
    /// - `Ok(Model)`: The authenticated instructor
    /// - `Err(AppError::AuthErr(InvalidCredentials))`: Unknown email or wrong password
    pub async fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::instructor::Model, AppError> {
        let instructor = InstructorRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &instructor.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(instructor)
    }
}

/// Hashes a password with argon2 and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verifies a password against a stored argon2 hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(_) => Err(AuthError::PasswordHash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn register_dto(email: &str) -> RegisterDto {
        RegisterDto {
            name: "Anna Berg".to_string(),
            email: email.to_string(),
            password: "correct horse".to_string(),
        }
    }

    /// Tests password hashing round-trip.
    ///
    /// Expected: Ok with the original password verifying and a wrong one not
    #[test]
    fn hashes_and_verifies_password() {
        let hash = hash_password("my_secure_password").unwrap();

        assert!(verify_password("my_secure_password", &hash).unwrap());
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    /// Tests registering and logging in.
    ///
    /// Expected: Ok with matching credentials accepted and wrong password rejected
    #[tokio::test]
    async fn registers_and_verifies_credentials() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Instructor)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let instructor = service.register(register_dto("anna@example.com")).await.unwrap();
        assert_eq!(instructor.email, "anna@example.com");

        let verified = service
            .verify_credentials("anna@example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(verified.id, instructor.id);

        let wrong = service
            .verify_credentials("anna@example.com", "battery staple")
            .await;
        assert!(matches!(
            wrong,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    /// Tests duplicate registration.
    ///
    /// Expected: Err(EmailTaken) on the second register with the same email
    #[tokio::test]
    async fn rejects_duplicate_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Instructor)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service.register(register_dto("anna@example.com")).await.unwrap();

        let duplicate = service.register(register_dto("anna@example.com")).await;
        assert!(matches!(
            duplicate,
            Err(AppError::AuthErr(AuthError::EmailTaken))
        ));
    }

    /// Tests input validation on registration.
    ///
    /// Expected: Err(BadRequest) for blank name, bad email, short password
    #[tokio::test]
    async fn rejects_invalid_registration_input() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Instructor)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);

        let mut blank_name = register_dto("anna@example.com");
        blank_name.name = "  ".to_string();
        assert!(matches!(
            service.register(blank_name).await,
            Err(AppError::BadRequest(_))
        ));

        let bad_email = register_dto("not-an-email");
        assert!(matches!(
            service.register(bad_email).await,
            Err(AppError::BadRequest(_))
        ));

        let mut short_password = register_dto("anna@example.com");
        short_password.password = "short".to_string();
        assert!(matches!(
            service.register(short_password).await,
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests login with an unknown email.
    ///
    /// Expected: Err(InvalidCredentials), indistinguishable from a wrong password
    #[tokio::test]
    async fn rejects_unknown_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Instructor)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthService::new(db)
            .verify_credentials("ghost@example.com", "whatever1")
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }
}
