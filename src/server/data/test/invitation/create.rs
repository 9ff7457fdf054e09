use super::*;

/// Tests persisting a new invitation.
///
/// Verifies that the repository stores the code, seat reference, and expiry,
/// with the claim fields unset.
///
/// Expected: Ok with an unclaimed invitation
#[tokio::test]
async fn creates_unclaimed_invitation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let expires_at = Utc::now() + Duration::days(7);
    let repo = InvitationRepository::new(db);
    let invitation = repo
        .create("ABCD2345".to_string(), seat.id, expires_at)
        .await?;

    assert_eq!(invitation.code, "ABCD2345");
    assert_eq!(invitation.seat_id, seat.id);
    assert_eq!(invitation.expires_at, expires_at);
    assert!(invitation.claimed_at.is_none());
    assert!(invitation.claimed_student_id.is_none());

    Ok(())
}

/// Tests the unique index on the code column.
///
/// Inserting the same code twice must fail at the database level; this is
/// the store-side guarantee behind collision-checked generation.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let expires_at = Utc::now() + Duration::days(7);
    let repo = InvitationRepository::new(db);
    repo.create("ABCD2345".to_string(), seat.id, expires_at)
        .await?;

    let duplicate = repo
        .create("ABCD2345".to_string(), seat.id, expires_at)
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
