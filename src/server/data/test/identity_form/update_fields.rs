use super::*;

/// Tests the partial field update.
///
/// Only the phone changes; every other field keeps its stored value and the
/// form stays submitted.
///
/// Expected: Ok with phone replaced, name untouched, updated_at advanced
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;

    let repo = IdentityFormRepository::new(db);
    let form = repo
        .create_submitted(seat.id, &sample_params(), Utc::now())
        .await?;

    let later = Utc::now() + chrono::Duration::minutes(5);
    let updated = repo
        .update_fields(
            form.clone(),
            UpdateIdentityFormParams {
                phone: Some("+46700009999".to_string()),
                ..Default::default()
            },
            later,
        )
        .await?;

    assert_eq!(updated.phone.as_deref(), Some("+46700009999"));
    assert_eq!(updated.student_name, form.student_name);
    assert_eq!(updated.status, "submitted");
    assert_eq!(updated.submitted_at, form.submitted_at);
    assert_eq!(updated.updated_at, later);

    Ok(())
}
