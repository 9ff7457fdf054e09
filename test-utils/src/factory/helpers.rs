//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an open seat with its full dependency chain.
///
/// This is a convenience method that creates:
/// 1. Instructor
/// 2. Lesson (owned by the instructor)
/// 3. OrderSeat (open, seat number 1)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((instructor, lesson, seat))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_open_seat(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::instructor::Model,
        entity::lesson::Model,
        entity::order_seat::Model,
    ),
    DbErr,
> {
    let instructor = crate::factory::instructor::create_instructor(db).await?;
    let lesson = crate::factory::lesson::create_lesson(db, instructor.id).await?;
    let seat = crate::factory::seat::create_seat(db, lesson.id).await?;

    Ok((instructor, lesson, seat))
}

/// Creates a claimed seat with a claimed invitation and a submitted identity form.
///
/// Builds the same hierarchy as `create_open_seat`, then a student, and marks
/// the seat and invitation claimed by that student with a submitted form. The
/// resulting state is exactly what a successful claim produces, which makes
/// this the starting point for confirm and analysis tests.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((instructor, lesson, seat, student, invitation, form))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_claimed_seat(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::instructor::Model,
        entity::lesson::Model,
        entity::order_seat::Model,
        entity::student::Model,
        entity::seat_invitation::Model,
        entity::seat_identity_form::Model,
    ),
    DbErr,
> {
    let instructor = crate::factory::instructor::create_instructor(db).await?;
    let lesson = crate::factory::lesson::create_lesson(db, instructor.id).await?;
    let student = crate::factory::student::create_student(db).await?;

    let claimed_at = Utc::now();
    let seat = crate::factory::seat::SeatFactory::new(db, lesson.id)
        .status("claimed")
        .claimed_by(student.id, claimed_at)
        .build()
        .await?;
    let invitation = crate::factory::invitation::InvitationFactory::new(db, seat.id)
        .claimed_by(student.id, claimed_at)
        .build()
        .await?;
    let form = crate::factory::identity_form::IdentityFormFactory::new(db, seat.id)
        .student_name(&student.name)
        .build()
        .await?;

    Ok((instructor, lesson, seat, student, invitation, form))
}
