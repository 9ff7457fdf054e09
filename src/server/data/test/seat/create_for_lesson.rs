use super::*;

/// Tests creating the seat set of a lesson.
///
/// Expected: Ok with seats numbered 1..=count, all open and unclaimed
#[tokio::test]
async fn creates_numbered_open_seats() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let instructor = factory::instructor::create_instructor(db).await?;
    let lesson = factory::lesson::create_lesson(db, instructor.id).await?;

    let repo = SeatRepository::new(db);
    let seats = repo.create_for_lesson(lesson.id, 4).await?;

    assert_eq!(seats.len(), 4);
    for (index, seat) in seats.iter().enumerate() {
        assert_eq!(seat.lesson_id, lesson.id);
        assert_eq!(seat.seat_number, index as i32 + 1);
        assert_eq!(seat.status, "open");
        assert!(seat.claimed_student_id.is_none());
        assert!(seat.claimed_at.is_none());
    }

    let stored = repo.get_by_lesson(lesson.id).await?;
    assert_eq!(stored.len(), 4);

    Ok(())
}
