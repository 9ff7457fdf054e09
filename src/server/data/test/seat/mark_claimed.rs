use super::*;

/// Tests the open-to-claimed transition guard.
///
/// The first transition succeeds; a second attempt against the now-claimed
/// seat must observe zero affected rows.
///
/// Expected: 1 row affected, then 0, with claim fields set once
#[tokio::test]
async fn claims_open_seat_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let student = factory::student::create_student(db).await?;
    let other_student = factory::student::create_student(db).await?;

    let repo = SeatRepository::new(db);

    let first = repo.mark_claimed(seat.id, student.id, Utc::now()).await?;
    assert_eq!(first, 1);

    let second = repo
        .mark_claimed(seat.id, other_student.id, Utc::now())
        .await?;
    assert_eq!(second, 0);

    let stored = entity::prelude::OrderSeat::find_by_id(seat.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "claimed");
    assert_eq!(stored.claimed_student_id, Some(student.id));
    assert!(stored.claimed_at.is_some());

    Ok(())
}
