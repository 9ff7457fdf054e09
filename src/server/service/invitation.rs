use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::invitation::InvitationDto,
    server::{
        data::{invitation::InvitationRepository, seat::SeatRepository},
        error::{claim::ClaimError, AppError},
        service::{audit::AuditLogger, code::CodeGenerator},
    },
};

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
    /// When true, issuing a new invitation expires all still-live unclaimed
    /// invitations for the same seat, so at most one invitation per seat is
    /// claimable at any time.
    revoke_prior_invitations: bool,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection, revoke_prior_invitations: bool) -> Self {
        Self {
            db,
            revoke_prior_invitations,
        }
    }

    /// Issues a new invitation for a seat.
    ///
    /// Generates a collision-checked code and persists it with a deadline of
    /// `expires_in_days` from now. Seats may receive new invitations in any
    /// state; whether earlier unclaimed invitations survive is governed by the
    /// revocation policy (revoked invitations are expired, never deleted).
    ///
    /// # Arguments
    /// - `seat_id`: Seat to issue the invitation for
    /// - `expires_in_days`: Days until the code stops being claimable
    /// - `actor`: Audit trail identity of the caller
    ///
    /// # Returns
    /// - `Ok(InvitationDto)`: The created invitation
    /// - `Err(AppError)`: Seat missing, invalid expiry, code generation
    ///   exhausted, or database error
    pub async fn create(
        &self,
        seat_id: i32,
        expires_in_days: i64,
        actor: &str,
    ) -> Result<InvitationDto, AppError> {
        if expires_in_days <= 0 {
            return Err(AppError::BadRequest(
                "expires_in_days must be positive".to_string(),
            ));
        }

        let seat_repo = SeatRepository::new(self.db);
        if seat_repo.get_by_id(seat_id).await?.is_none() {
            return Err(ClaimError::SeatNotFound(seat_id).into());
        }

        let invitation_repo = InvitationRepository::new(self.db);
        let code = CodeGenerator::generate_unique(|code| {
            let repo = InvitationRepository::new(self.db);
            async move { repo.code_exists(&code).await }
        })
        .await?;

        let now = Utc::now();

        if self.revoke_prior_invitations {
            let revoked = invitation_repo.expire_open_for_seat(seat_id, now).await?;
            if revoked > 0 {
                tracing::debug!("Revoked {} prior invitation(s) for seat {}", revoked, seat_id);
            }
        }

        let invitation = invitation_repo
            .create(code, seat_id, now + Duration::days(expires_in_days))
            .await?;

        AuditLogger::new(self.db)
            .log(
                actor,
                "invitation.created",
                "seat_invitation",
                invitation.id,
                json!({ "seat_id": seat_id, "expires_at": invitation.expires_at.timestamp() }),
            )
            .await;

        Ok(InvitationDto::from_model(invitation, now))
    }

    /// Looks up an invitation by code.
    ///
    /// # Returns
    /// - `Ok(Some(InvitationDto))`: The invitation, with `is_expired` and
    ///   `is_claimed` derived at read time
    /// - `Ok(None)`: No invitation carries this code
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, code: &str) -> Result<Option<InvitationDto>, AppError> {
        self.get_at(code, Utc::now()).await
    }

    /// Clock-injected variant of [`InvitationService::get`].
    pub(crate) async fn get_at(
        &self,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<InvitationDto>, AppError> {
        let invitation = InvitationRepository::new(self.db).find_by_code(code).await?;

        Ok(invitation.map(|model| InvitationDto::from_model(model, now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::code::{CODE_ALPHABET, CODE_LENGTH};
    use test_utils::{builder::TestBuilder, factory};

    /// Tests issuing an invitation for an existing seat.
    ///
    /// Expected: Ok with an 8-character code over the restricted alphabet,
    /// unclaimed, expiring roughly seven days out
    #[tokio::test]
    async fn creates_invitation_for_existing_seat() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();

        let invitation = InvitationService::new(db, false)
            .create(seat.id, 7, "instructor:1")
            .await
            .unwrap();

        assert_eq!(invitation.seat_id, seat.id);
        assert_eq!(invitation.code.len(), CODE_LENGTH);
        assert!(invitation.code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        assert!(!invitation.is_claimed);
        assert!(!invitation.is_expired);

        let remaining = invitation.expires_at - Utc::now();
        assert!(remaining > Duration::days(6));
        assert!(remaining <= Duration::days(7));
    }

    /// Tests issuing an invitation for a seat that does not exist.
    ///
    /// Expected: Err(SeatNotFound)
    #[tokio::test]
    async fn fails_for_missing_seat() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = InvitationService::new(db, false).create(999, 7, "instructor:1").await;

        assert!(matches!(
            result,
            Err(AppError::ClaimErr(ClaimError::SeatNotFound(999)))
        ));
    }

    /// Tests rejecting a non-positive expiry window.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_non_positive_expiry() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();

        let result = InvitationService::new(db, false).create(seat.id, 0, "instructor:1").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the derived expiry flag on both sides of the deadline.
    ///
    /// A code read at exactly its expiry instant is expired; one second
    /// earlier it is live.
    ///
    /// Expected: Ok with is_expired true at the boundary, false before it
    #[tokio::test]
    async fn derives_expiry_at_exact_boundary() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        let expires_at = Utc::now() + Duration::hours(1);
        let invitation = factory::invitation::InvitationFactory::new(db, seat.id)
            .expires_at(expires_at)
            .build()
            .await
            .unwrap();

        let service = InvitationService::new(db, false);

        let at_boundary = service
            .get_at(&invitation.code, expires_at)
            .await
            .unwrap()
            .unwrap();
        assert!(at_boundary.is_expired);

        let before_boundary = service
            .get_at(&invitation.code, expires_at - Duration::seconds(1))
            .await
            .unwrap()
            .unwrap();
        assert!(!before_boundary.is_expired);
    }

    /// Tests the derived claimed flag.
    ///
    /// Expected: Ok with is_claimed true for a claimed invitation
    #[tokio::test]
    async fn derives_claimed_flag() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, _seat, _student, invitation, _form) =
            factory::helpers::create_claimed_seat(db).await.unwrap();

        let dto = InvitationService::new(db, false)
            .get(&invitation.code)
            .await
            .unwrap()
            .unwrap();

        assert!(dto.is_claimed);
        assert!(dto.claimed_at.is_some());
        assert!(dto.claimed_student_id.is_some());
    }

    /// Tests lookup of an unknown code.
    ///
    /// Expected: Ok(None)
    #[tokio::test]
    async fn returns_none_for_unknown_code() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = InvitationService::new(db, false).get("NOSUCHCD").await.unwrap();

        assert!(result.is_none());
    }

    /// Tests the revocation policy when enabled.
    ///
    /// Issuing a second invitation must expire the first, still-live one. The
    /// revoked row is kept (expired, not deleted).
    ///
    /// Expected: Ok with the prior invitation expired and the new one live
    #[tokio::test]
    async fn revokes_prior_invitations_when_policy_enabled() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();

        let service = InvitationService::new(db, true);
        let first = service.create(seat.id, 7, "instructor:1").await.unwrap();
        let second = service.create(seat.id, 7, "instructor:1").await.unwrap();

        let first_after = service.get(&first.code).await.unwrap().unwrap();
        assert!(first_after.is_expired);

        let second_after = service.get(&second.code).await.unwrap().unwrap();
        assert!(!second_after.is_expired);
    }

    /// Tests the default policy of multiple live invitations per seat.
    ///
    /// With revocation disabled, issuing again leaves the earlier invitation
    /// claimable.
    ///
    /// Expected: Ok with both invitations live
    #[tokio::test]
    async fn keeps_prior_invitations_without_revocation_policy() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();

        let service = InvitationService::new(db, false);
        let first = service.create(seat.id, 7, "instructor:1").await.unwrap();
        let second = service.create(seat.id, 7, "instructor:1").await.unwrap();

        assert!(!service.get(&first.code).await.unwrap().unwrap().is_expired);
        assert!(!service.get(&second.code).await.unwrap().unwrap().is_expired);
    }
}
