use super::*;

/// Tests creating a new student mapping.
///
/// Expected: Ok with the stored identity fields
#[tokio::test]
async fn creates_new_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = StudentRepository::new(db)
        .find_or_create("Anna Berg", Some("+46700001111"), Some("anna@example.com"))
        .await?;

    assert_eq!(student.name, "Anna Berg");
    assert_eq!(student.phone.as_deref(), Some("+46700001111"));
    assert_eq!(student.email.as_deref(), Some("anna@example.com"));

    Ok(())
}

/// Tests reuse of an existing mapping on a matching name and phone.
///
/// Expected: Ok with the same row and no second insert
#[tokio::test]
async fn reuses_student_on_name_and_phone_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo
        .find_or_create("Anna Berg", Some("+46700001111"), None)
        .await?;
    let second = repo
        .find_or_create("Anna Berg", Some("+46700001111"), None)
        .await?;

    assert_eq!(first.id, second.id);

    let count = entity::prelude::Student::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a differing phone produces a distinct mapping.
///
/// Two students can share a name; the phone disambiguates.
///
/// Expected: Ok with two separate rows
#[tokio::test]
async fn creates_distinct_student_for_different_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo
        .find_or_create("Anna Berg", Some("+46700001111"), None)
        .await?;
    let second = repo
        .find_or_create("Anna Berg", Some("+46700002222"), None)
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Tests that claims without a phone always create a fresh mapping.
///
/// A bare name is not enough identity to merge records on.
///
/// Expected: Ok with two separate rows
#[tokio::test]
async fn creates_fresh_student_without_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let first = repo.find_or_create("Anna Berg", None, None).await?;
    let second = repo.find_or_create("Anna Berg", None, None).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
