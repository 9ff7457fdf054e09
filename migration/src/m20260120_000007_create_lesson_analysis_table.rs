use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260112_000001_create_instructor_table::Instructor,
    m20260112_000004_create_order_seat_table::OrderSeat,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonAnalysis::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonAnalysis::Id))
                    .col(integer_uniq(LessonAnalysis::SeatId))
                    .col(integer(LessonAnalysis::InstructorId))
                    .col(integer(LessonAnalysis::Rating))
                    .col(text(LessonAnalysis::Notes))
                    .col(boolean(LessonAnalysis::Shared))
                    .col(
                        timestamp(LessonAnalysis::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(LessonAnalysis::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_analysis_seat_id")
                            .from(LessonAnalysis::Table, LessonAnalysis::SeatId)
                            .to(OrderSeat::Table, OrderSeat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_analysis_instructor_id")
                            .from(LessonAnalysis::Table, LessonAnalysis::InstructorId)
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
            .drop_table(Table::drop().table(LessonAnalysis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonAnalysis {
    Table,
    Id,
    SeatId,
    InstructorId,
    Rating,
    Notes,
    Shared,
    CreatedAt,
    UpdatedAt,
}
