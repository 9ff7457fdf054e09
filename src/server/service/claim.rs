use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{invitation::ClaimResultDto, seat::IdentityFormDto},
    server::{
        data::{
            identity_form::IdentityFormRepository, invitation::InvitationRepository,
            seat::SeatRepository, student::StudentRepository,
        },
        error::{claim::ClaimError, AppError},
        model::{
            claim::IdentityFormParams,
            status::{FormStatus, SeatStatus},
        },
        service::audit::AuditLogger,
        util::validate::validate_identity_payload,
    },
};

/// The claim and confirm transitions of the seat lifecycle.
///
/// Both transitions mutate several entities at once and therefore run inside
/// a single database transaction; every early return before the commit rolls
/// the whole transition back, so no partial state is ever visible. The
/// individual updates are additionally guarded by conditional filters
/// (`claimed_at IS NULL`, `status = ...`) which act as compare-and-swap
/// against concurrent requests racing on the same code or seat.
pub struct ClaimService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Redeems an invitation code, binding its seat to a student identity.
    ///
    /// Validates the payload, then atomically: marks the invitation claimed,
    /// transitions the seat from open to claimed, and creates the identity
    /// form in submitted status. Replays of an already-redeemed code fail with
    /// `InvitationAlreadyClaimed` and change nothing, so a client that missed
    /// the first response can safely retry and inspect the error.
    ///
    /// # Arguments
    /// - `code`: The invitation code being redeemed
    /// - `params`: Student identity data for the form
    ///
    /// # Returns
    /// - `Ok(ClaimResultDto)`: The claimed seat and its submitted form
    /// - `Err(AppError)`: Validation, lifecycle, or database error
    pub async fn claim(
        &self,
        code: &str,
        params: IdentityFormParams,
    ) -> Result<ClaimResultDto, AppError> {
        self.claim_at(code, params, Utc::now()).await
    }

    /// Clock-injected variant of [`ClaimService::claim`].
    pub(crate) async fn claim_at(
        &self,
        code: &str,
        params: IdentityFormParams,
        now: DateTime<Utc>,
    ) -> Result<ClaimResultDto, AppError> {
        let errors = validate_identity_payload(&params);
        if !errors.is_empty() {
            return Err(ClaimError::Validation(errors).into());
        }

        let txn = self.db.begin().await?;

        let invitation = InvitationRepository::new(&txn)
            .find_by_code(code)
            .await?
            .ok_or(ClaimError::InvitationNotFound)?;

        // Expiry at exactly `now` counts as expired.
        if now >= invitation.expires_at {
            return Err(ClaimError::InvitationExpired.into());
        }
        if invitation.claimed_at.is_some() {
            return Err(ClaimError::InvitationAlreadyClaimed.into());
        }

        let student = StudentRepository::new(&txn)
            .find_or_create(
                &params.student_name,
                params.phone.as_deref(),
                params.email.as_deref(),
            )
            .await?;

        let claimed = InvitationRepository::new(&txn)
            .mark_claimed(invitation.id, student.id, now)
            .await?;
        if claimed == 0 {
            return Err(ClaimError::InvitationAlreadyClaimed.into());
        }

        let seated = SeatRepository::new(&txn)
            .mark_claimed(invitation.seat_id, student.id, now)
            .await?;
        if seated == 0 {
            // The seat was taken through another invitation.
            return Err(ClaimError::InvitationAlreadyClaimed.into());
        }

        let form = IdentityFormRepository::new(&txn)
            .create_submitted(invitation.seat_id, &params, now)
            .await?;
        let seat = SeatRepository::new(&txn)
            .get_by_id(invitation.seat_id)
            .await?
            .ok_or(ClaimError::SeatNotFound(invitation.seat_id))?;

        if let Err(err) = txn.commit().await {
            tracing::error!("Claim transaction failed to commit: {}", err);
            return Err(ClaimError::TransactionFailed.into());
        }

        AuditLogger::new(self.db)
            .log(
                "student",
                "seat.claimed",
                "order_seat",
                seat.id,
                json!({ "code": code, "student_id": student.id }),
            )
            .await;

        Ok(ClaimResultDto {
            seat: seat.into(),
            form: form.into(),
        })
    }

    /// Confirms a claimed seat, locking its identity form.
    ///
    /// Requires the seat to be claimed with a submitted form. Sets the form to
    /// confirmed with a confirmation timestamp and the seat to confirmed, in
    /// one transaction. Confirmation is terminal: there is no transition back,
    /// and a second confirm is rejected.
    ///
    /// # Arguments
    /// - `seat_id`: The claimed seat to confirm
    /// - `actor`: Audit trail identity of the caller
    ///
    /// # Returns
    /// - `Ok(IdentityFormDto)`: The confirmed form
    /// - `Err(AppError)`: Precondition or database error
    pub async fn confirm(&self, seat_id: i32, actor: &str) -> Result<IdentityFormDto, AppError> {
        self.confirm_at(seat_id, actor, Utc::now()).await
    }

    /// Clock-injected variant of [`ClaimService::confirm`].
    pub(crate) async fn confirm_at(
        &self,
        seat_id: i32,
        actor: &str,
        now: DateTime<Utc>,
    ) -> Result<IdentityFormDto, AppError> {
        let txn = self.db.begin().await?;

        let seat_repo = SeatRepository::new(&txn);
        let seat = seat_repo
            .get_by_id(seat_id)
            .await?
            .ok_or(ClaimError::SeatNotFound(seat_id))?;

        if SeatStatus::parse(&seat.status) != Some(SeatStatus::Claimed) {
            return Err(ClaimError::SeatNotClaimed(seat_id).into());
        }

        let form_repo = IdentityFormRepository::new(&txn);
        let form = form_repo
            .find_by_seat(seat_id)
            .await?
            .ok_or(ClaimError::SeatNotClaimed(seat_id))?;

        if FormStatus::parse(&form.status) != Some(FormStatus::Submitted) {
            return Err(ClaimError::SeatNotClaimed(seat_id).into());
        }

        if form_repo.mark_confirmed(seat_id, now).await? == 0 {
            return Err(ClaimError::SeatNotClaimed(seat_id).into());
        }
        if seat_repo.mark_confirmed(seat_id).await? == 0 {
            return Err(ClaimError::SeatNotClaimed(seat_id).into());
        }

        let form = form_repo
            .find_by_seat(seat_id)
            .await?
            .ok_or(ClaimError::SeatNotClaimed(seat_id))?;

        if let Err(err) = txn.commit().await {
            tracing::error!("Confirm transaction failed to commit: {}", err);
            return Err(ClaimError::TransactionFailed.into());
        }

        AuditLogger::new(self.db)
            .log(
                actor,
                "seat.confirmed",
                "order_seat",
                seat_id,
                json!({ "form_id": form.id }),
            )
            .await;

        Ok(form.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    fn identity(name: &str) -> IdentityFormParams {
        IdentityFormParams {
            student_name: name.to_string(),
            phone: Some("+46700001111".to_string()),
            email: None,
            is_minor: false,
            guardian_name: None,
            guardian_phone: None,
            guardian_email: None,
            insurance_provider: None,
            insurance_policy_number: None,
        }
    }

    /// Tests the full lifecycle from open seat to confirmed form.
    ///
    /// Creates an open seat, issues an invitation, claims it for a minor with
    /// a guardian contact, then confirms. Checks every state the sequence
    /// passes through.
    ///
    /// Expected: Ok with seat open -> claimed -> confirmed and form
    /// submitted -> confirmed with confirmed_at set
    #[tokio::test]
    async fn claims_and_confirms_end_to_end() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        assert_eq!(seat.status, "open");

        let invitation = factory::invitation::InvitationFactory::new(db, seat.id)
            .expires_at(Utc::now() + Duration::days(7))
            .build()
            .await
            .unwrap();

        let params = IdentityFormParams {
            student_name: "王小明".to_string(),
            phone: None,
            email: None,
            is_minor: true,
            guardian_name: None,
            guardian_phone: None,
            guardian_email: Some("g@example.com".to_string()),
            insurance_provider: None,
            insurance_policy_number: None,
        };

        let service = ClaimService::new(db);
        let result = service.claim(&invitation.code, params).await.unwrap();

        assert_eq!(result.seat.status, "claimed");
        assert!(result.seat.claimed_at.is_some());
        assert!(result.seat.claimed_student_id.is_some());
        assert_eq!(result.form.status, "submitted");
        assert_eq!(result.form.student_name, "王小明");
        assert!(result.form.is_minor);
        assert!(result.form.submitted_at.is_some());
        assert!(result.form.confirmed_at.is_none());

        let form = service.confirm(seat.id, "instructor:1").await.unwrap();

        assert_eq!(form.status, "confirmed");
        assert!(form.confirmed_at.is_some());

        let seat_after = entity::prelude::OrderSeat::find_by_id(seat.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(seat_after.status, "confirmed");
    }

    /// Tests claiming with an unknown code.
    ///
    /// Expected: Err(InvitationNotFound)
    #[tokio::test]
    async fn rejects_unknown_code() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ClaimService::new(db)
            .claim("NOSUCHCD", identity("Anna"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::ClaimErr(ClaimError::InvitationNotFound))
        ));
    }

    /// Tests the expiry boundary with a controlled clock.
    ///
    /// A claim at exactly `expires_at` is rejected and changes nothing; a
    /// claim one second earlier succeeds.
    ///
    /// Expected: Err(InvitationExpired) at the boundary, Ok just before it
    #[tokio::test]
    async fn treats_expiry_instant_as_expired() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        let expires_at = Utc::now() + Duration::hours(1);
        let invitation = factory::invitation::InvitationFactory::new(db, seat.id)
            .expires_at(expires_at)
            .build()
            .await
            .unwrap();

        let service = ClaimService::new(db);

        let at_boundary = service
            .claim_at(&invitation.code, identity("Anna"), expires_at)
            .await;
        assert!(matches!(
            at_boundary,
            Err(AppError::ClaimErr(ClaimError::InvitationExpired))
        ));

        // The rejected claim must leave no trace.
        let seat_after = entity::prelude::OrderSeat::find_by_id(seat.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(seat_after.status, "open");

        let before_boundary = service
            .claim_at(
                &invitation.code,
                identity("Anna"),
                expires_at - Duration::seconds(1),
            )
            .await;
        assert!(before_boundary.is_ok());
    }

    /// Tests replay protection.
    ///
    /// The second claim with the same code fails and the stored seat and form
    /// are byte-identical to their state after the first claim, even though
    /// the replay carried a different identity payload.
    ///
    /// Expected: first Ok, second Err(InvitationAlreadyClaimed), state unchanged
    #[tokio::test]
    async fn rejects_replayed_claim_without_state_change() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        let invitation = factory::invitation::create_invitation(db, seat.id)
            .await
            .unwrap();

        let service = ClaimService::new(db);
        service.claim(&invitation.code, identity("Anna")).await.unwrap();

        let seat_after_first = entity::prelude::OrderSeat::find_by_id(seat.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        let form_after_first = entity::prelude::SeatIdentityForm::find()
            .one(db)
            .await
            .unwrap()
            .unwrap();

        let replay = service.claim(&invitation.code, identity("Bertil")).await;
        assert!(matches!(
            replay,
            Err(AppError::ClaimErr(ClaimError::InvitationAlreadyClaimed))
        ));

        let seat_after_second = entity::prelude::OrderSeat::find_by_id(seat.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        let form_after_second = entity::prelude::SeatIdentityForm::find()
            .one(db)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(seat_after_first, seat_after_second);
        assert_eq!(form_after_first, form_after_second);
        assert_eq!(form_after_second.student_name, "Anna");
    }

    /// Tests that a claim through a second live invitation rolls back fully.
    ///
    /// Two live invitations exist for one seat. The first claim wins the
    /// seat; the second claim passes the invitation check but loses the seat
    /// compare-and-swap, so the transaction must roll back, leaving the second
    /// invitation unclaimed.
    ///
    /// Expected: Err(InvitationAlreadyClaimed) and the second invitation
    /// still unclaimed (atomicity visible from outside)
    #[tokio::test]
    async fn rolls_back_claim_when_seat_already_taken() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        let first = factory::invitation::create_invitation(db, seat.id)
            .await
            .unwrap();
        let second = factory::invitation::create_invitation(db, seat.id)
            .await
            .unwrap();

        let service = ClaimService::new(db);
        service.claim(&first.code, identity("Anna")).await.unwrap();

        let result = service.claim(&second.code, identity("Bertil")).await;
        assert!(matches!(
            result,
            Err(AppError::ClaimErr(ClaimError::InvitationAlreadyClaimed))
        ));

        let second_after = entity::prelude::SeatInvitation::find_by_id(second.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert!(second_after.claimed_at.is_none());
        assert!(second_after.claimed_student_id.is_none());

        // Only one identity form exists, bound to the winning claim.
        let forms = entity::prelude::SeatIdentityForm::find().all(db).await.unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].student_name, "Anna");
    }

    /// Tests payload validation short-circuiting the claim.
    ///
    /// Expected: Err(Validation) with the offending field, invitation untouched
    #[tokio::test]
    async fn rejects_invalid_identity_payload() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await.unwrap();
        let invitation = factory::invitation::create_invitation(db, seat.id)
            .await
            .unwrap();

        let result = ClaimService::new(db)
            .claim(&invitation.code, identity(""))
            .await;

        match result {
            Err(AppError::ClaimErr(ClaimError::Validation(fields))) => {
                assert_eq!(fields[0].field, "student_name");
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }

        let invitation_after = entity::prelude::SeatInvitation::find_by_id(invitation.id)
            .one(db)
            .await
            .unwrap()
            .unwrap();
        assert!(invitation_after.claimed_at.is_none());
    }

    /// Tests that claiming reuses an existing student with matching name and phone.
    ///
    /// Expected: Ok with both seats bound to the same student record
    #[tokio::test]
    async fn reuses_student_mapping_on_matching_identity() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, lesson, seat_one) =
            factory::helpers::create_open_seat(db).await.unwrap();
        let seat_two = factory::seat::create_seat(db, lesson.id).await.unwrap();

        let invitation_one = factory::invitation::create_invitation(db, seat_one.id)
            .await
            .unwrap();
        let invitation_two = factory::invitation::create_invitation(db, seat_two.id)
            .await
            .unwrap();

        let service = ClaimService::new(db);
        let first = service
            .claim(&invitation_one.code, identity("Anna"))
            .await
            .unwrap();
        let second = service
            .claim(&invitation_two.code, identity("Anna"))
            .await
            .unwrap();

        assert_eq!(
            first.seat.claimed_student_id,
            second.seat.claimed_student_id
        );

        let students = entity::prelude::Student::find().all(db).await.unwrap();
        assert_eq!(students.len(), 1);
    }

    /// Tests confirm preconditions.
    ///
    /// Confirm on an open seat, on a missing seat, and on a claimed seat
    /// without a form must all fail with the precondition error.
    ///
    /// Expected: Err(SeatNotClaimed) / Err(SeatNotFound)
    #[tokio::test]
    async fn rejects_confirm_without_claim() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, lesson, open_seat) =
            factory::helpers::create_open_seat(db).await.unwrap();

        let service = ClaimService::new(db);

        let on_open = service.confirm(open_seat.id, "instructor:1").await;
        assert!(matches!(
            on_open,
            Err(AppError::ClaimErr(ClaimError::SeatNotClaimed(_)))
        ));

        let on_missing = service.confirm(4242, "instructor:1").await;
        assert!(matches!(
            on_missing,
            Err(AppError::ClaimErr(ClaimError::SeatNotFound(4242)))
        ));

        // Claimed seat, but no identity form was ever stored.
        let student = factory::student::create_student(db).await.unwrap();
        let formless_seat = factory::seat::SeatFactory::new(db, lesson.id)
            .status("claimed")
            .claimed_by(student.id, Utc::now())
            .build()
            .await
            .unwrap();

        let on_formless = service.confirm(formless_seat.id, "instructor:1").await;
        assert!(matches!(
            on_formless,
            Err(AppError::ClaimErr(ClaimError::SeatNotClaimed(_)))
        ));
    }

    /// Tests that confirmation is terminal.
    ///
    /// Expected: first confirm Ok, second Err(SeatNotClaimed)
    #[tokio::test]
    async fn rejects_double_confirmation() {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_instructor, _lesson, seat, _student, _invitation, _form) =
            factory::helpers::create_claimed_seat(db).await.unwrap();

        let service = ClaimService::new(db);
        service.confirm(seat.id, "instructor:1").await.unwrap();

        let again = service.confirm(seat.id, "instructor:1").await;
        assert!(matches!(
            again,
            Err(AppError::ClaimErr(ClaimError::SeatNotClaimed(_)))
        ));
    }
}
