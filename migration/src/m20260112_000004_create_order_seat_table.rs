use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260112_000002_create_student_table::Student, m20260112_000003_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderSeat::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderSeat::Id))
                    .col(integer(OrderSeat::LessonId))
                    .col(integer(OrderSeat::SeatNumber))
                    .col(string(OrderSeat::Status))
                    .col(integer_null(OrderSeat::ClaimedStudentId))
                    .col(timestamp_null(OrderSeat::ClaimedAt))
                    .col(
                        timestamp(OrderSeat::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_seat_lesson_id")
                            .from(OrderSeat::Table, OrderSeat::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_seat_claimed_student_id")
                            .from(OrderSeat::Table, OrderSeat::ClaimedStudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderSeat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderSeat {
    Table,
    Id,
    LessonId,
    SeatNumber,
    Status,
    ClaimedStudentId,
    ClaimedAt,
    CreatedAt,
}
