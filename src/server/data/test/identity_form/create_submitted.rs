use super::*;

/// Tests creating a submitted form from a claim payload.
///
/// Expected: Ok with submitted status, submitted_at set, confirmed_at unset
#[tokio::test]
async fn creates_form_in_submitted_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let now = Utc::now();
    let form = IdentityFormRepository::new(db)
        .create_submitted(seat.id, &sample_params(), now)
        .await?;

    assert_eq!(form.seat_id, seat.id);
    assert_eq!(form.status, "submitted");
    assert_eq!(form.student_name, "Anna Berg");
    assert_eq!(form.submitted_at, Some(now));
    assert!(form.confirmed_at.is_none());

    Ok(())
}

/// Tests the one-form-per-seat constraint.
///
/// Expected: Err(DbErr) when a second form is created for the same seat
#[tokio::test]
async fn rejects_second_form_for_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let repo = IdentityFormRepository::new(db);
    repo.create_submitted(seat.id, &sample_params(), Utc::now())
        .await?;

    let duplicate = repo
        .create_submitted(seat.id, &sample_params(), Utc::now())
        .await;

    assert!(duplicate.is_err());

    Ok(())
}
