use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260112_000002_create_student_table::Student,
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
                    .table(SeatInvitation::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatInvitation::Id))
                    .col(string_uniq(SeatInvitation::Code))
                    .col(integer(SeatInvitation::SeatId))
                    .col(timestamp(SeatInvitation::ExpiresAt))
                    .col(timestamp_null(SeatInvitation::ClaimedAt))
                    .col(integer_null(SeatInvitation::ClaimedStudentId))
                    .col(
                        timestamp(SeatInvitation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_invitation_seat_id")
                            .from(SeatInvitation::Table, SeatInvitation::SeatId)
                            .to(OrderSeat::Table, OrderSeat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_invitation_claimed_student_id")
                            .from(SeatInvitation::Table, SeatInvitation::ClaimedStudentId)
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
            .drop_table(Table::drop().table(SeatInvitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatInvitation {
    Table,
    Id,
    Code,
    SeatId,
    ExpiresAt,
    ClaimedAt,
    ClaimedStudentId,
    CreatedAt,
}
