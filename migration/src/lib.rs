pub use sea_orm_migration::prelude::*;

mod m20260112_000001_create_instructor_table;
mod m20260112_000002_create_student_table;
mod m20260112_000003_create_lesson_table;
mod m20260112_000004_create_order_seat_table;
mod m20260112_000005_create_seat_invitation_table;
mod m20260113_000006_create_seat_identity_form_table;
mod m20260120_000007_create_lesson_analysis_table;
mod m20260120_000008_create_audit_log_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260112_000001_create_instructor_table::Migration),
            Box::new(m20260112_000002_create_student_table::Migration),
            Box::new(m20260112_000003_create_lesson_table::Migration),
            Box::new(m20260112_000004_create_order_seat_table::Migration),
            Box::new(m20260112_000005_create_seat_invitation_table::Migration),
            Box::new(m20260113_000006_create_seat_identity_form_table::Migration),
            Box::new(m20260120_000007_create_lesson_analysis_table::Migration),
            Box::new(m20260120_000008_create_audit_log_table::Migration),
        ]
    }
}
