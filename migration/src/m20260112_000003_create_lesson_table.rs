use sea_orm_migration::{prelude::*, schema::*};

use super::m20260112_000001_create_instructor_table::Instructor;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer(Lesson::InstructorId))
                    .col(string(Lesson::Title))
                    .col(string(Lesson::Resort))
                    .col(string(Lesson::Discipline))
                    .col(timestamp(Lesson::LessonTime))
                    .col(integer(Lesson::SeatCount))
                    .col(
                        timestamp(Lesson::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_instructor_id")
                            .from(Lesson::Table, Lesson::InstructorId)
                            .to(Instructor::Table, Instructor::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    InstructorId,
    Title,
    Resort,
    Discipline,
    LessonTime,
    SeatCount,
    CreatedAt,
}
