use super::*;

/// Tests looking up an invitation by its code.
///
/// Expected: Ok(Some) for a stored code, Ok(None) for an unknown one
#[tokio::test]
async fn finds_stored_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let invitation = factory::invitation::create_invitation(db, seat.id).await?;

    let repo = InvitationRepository::new(db);

    let found = repo.find_by_code(&invitation.code).await?;
    assert_eq!(found.map(|i| i.id), Some(invitation.id));

    let missing = repo.find_by_code("NOSUCHCD").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the uniqueness probe used by code generation.
///
/// Expected: Ok(true) for a taken code, Ok(false) otherwise
#[tokio::test]
async fn reports_code_existence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_instructor, _lesson, seat) = factory::helpers::create_open_seat(db).await?;
    let invitation = factory::invitation::create_invitation(db, seat.id).await?;

    let repo = InvitationRepository::new(db);

    assert!(repo.code_exists(&invitation.code).await?);
    assert!(!repo.code_exists("NOSUCHCD").await?);

    Ok(())
}
