use super::*;

/// Tests the submitted-to-confirmed transition guard.
///
/// Expected: 1 row affected with confirmed_at set, then 0 on the repeat
#[tokio::test]
async fn confirms_submitted_form_exactly_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let repo = IdentityFormRepository::new(db);
    repo.create_submitted(seat.id, &sample_params(), Utc::now())
        .await?;

    let confirmed_at = Utc::now();
    let first = repo.mark_confirmed(seat.id, confirmed_at).await?;
    assert_eq!(first, 1);

    let stored = repo.find_by_seat(seat.id).await?.unwrap();
    assert_eq!(stored.status, "confirmed");
    assert_eq!(stored.confirmed_at, Some(confirmed_at));
    // The invariant: a confirmed form always carries its submission time.
    assert!(stored.submitted_at.is_some());

    let repeat = repo.mark_confirmed(seat.id, Utc::now()).await?;
    assert_eq!(repeat, 0);

    Ok(())
}
