use super::*;

/// Tests revoking the live, unclaimed invitations of a seat.
///
/// Three invitations exist: live-unclaimed, claimed, and already expired.
/// Only the first may be touched; revocation expires it without deleting.
///
/// Expected: 1 row affected, claimed and expired rows untouched, all rows kept
#[tokio::test]
async fn expires_only_live_unclaimed_invitations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let student = factory::student::create_student(db).await?;

    let now = Utc::now();
    let live = factory::invitation::create_invitation(db, seat.id).await?;
    let claimed = factory::invitation::InvitationFactory::new(db, seat.id)
        .claimed_by(student.id, now)
        .build()
        .await?;
    let already_expired = factory::invitation::InvitationFactory::new(db, seat.id)
        .expires_at(now - Duration::days(1))
        .build()
        .await?;

    let revoked = InvitationRepository::new(db)
        .expire_open_for_seat(seat.id, now)
        .await?;
    assert_eq!(revoked, 1);

    let live_after = entity::prelude::SeatInvitation::find_by_id(live.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(live_after.expires_at, now);

    let claimed_after = entity::prelude::SeatInvitation::find_by_id(claimed.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(claimed_after.expires_at, claimed.expires_at);

    let expired_after = entity::prelude::SeatInvitation::find_by_id(already_expired.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(expired_after.expires_at, already_expired.expires_at);

    // Revocation never deletes.
    let all = InvitationRepository::new(db).find_by_seat(seat.id).await?;
    assert_eq!(all.len(), 3);

    Ok(())
}
