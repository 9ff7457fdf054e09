use super::*;

/// Tests the conditional claim update.
///
/// The first call must flip the claim fields; a second call must observe
/// zero affected rows because the `claimed_at IS NULL` guard no longer holds.
///
/// Expected: 1 row affected, then 0, with claim fields set once
#[tokio::test]
async fn claims_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let invitation = factory::invitation::create_invitation(db, seat.id).await?;
    let student = factory::student::create_student(db).await?;

    let claimed_at = Utc::now();
    let repo = InvitationRepository::new(db);

    let first = repo.mark_claimed(invitation.id, student.id, claimed_at).await?;
    assert_eq!(first, 1);

    let second = repo.mark_claimed(invitation.id, student.id, claimed_at).await?;
    assert_eq!(second, 0);

    let stored = entity::prelude::SeatInvitation::find_by_id(invitation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.claimed_student_id, Some(student.id));
    assert!(stored.claimed_at.is_some());

    Ok(())
}
