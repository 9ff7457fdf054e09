use super::*;

/// Tests the claimed-to-confirmed transition guard.
///
/// Only a claimed seat may confirm; open seats and already-confirmed seats
/// must observe zero affected rows, keeping the status monotonic.
///
/// Expected: 0 for open, 1 for claimed, 0 for the repeat
#[tokio::test]
async fn confirms_only_claimed_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let student = factory::student::create_student(db).await?;

    let repo = SeatRepository::new(db);

    let on_open = repo.mark_confirmed(seat.id).await?;
    assert_eq!(on_open, 0);

    repo.mark_claimed(seat.id, student.id, Utc::now()).await?;

    let on_claimed = repo.mark_confirmed(seat.id).await?;
    assert_eq!(on_claimed, 1);

    let repeat = repo.mark_confirmed(seat.id).await?;
    assert_eq!(repeat, 0);

    let stored = entity::prelude::OrderSeat::find_by_id(seat.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "confirmed");

    Ok(())
}
