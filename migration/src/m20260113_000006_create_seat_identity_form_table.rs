use sea_orm_migration::{prelude::*, schema::*};

use super::m20260112_000004_create_order_seat_table::OrderSeat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatIdentityForm::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatIdentityForm::Id))
                    .col(integer_uniq(SeatIdentityForm::SeatId))
                    .col(string(SeatIdentityForm::Status))
                    .col(string(SeatIdentityForm::StudentName))
                    .col(string_null(SeatIdentityForm::Phone))
                    .col(string_null(SeatIdentityForm::Email))
                    .col(boolean(SeatIdentityForm::IsMinor))
                    .col(string_null(SeatIdentityForm::GuardianName))
                    .col(string_null(SeatIdentityForm::GuardianPhone))
                    .col(string_null(SeatIdentityForm::GuardianEmail))
                    .col(string_null(SeatIdentityForm::InsuranceProvider))
                    .col(string_null(SeatIdentityForm::InsurancePolicyNumber))
                    .col(timestamp_null(SeatIdentityForm::SubmittedAt))
                    .col(timestamp_null(SeatIdentityForm::ConfirmedAt))
                    .col(
                        timestamp(SeatIdentityForm::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(SeatIdentityForm::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_identity_form_seat_id")
                            .from(SeatIdentityForm::Table, SeatIdentityForm::SeatId)
                            .to(OrderSeat::Table, OrderSeat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatIdentityForm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatIdentityForm {
    Table,
    Id,
    SeatId,
    Status,
    StudentName,
    Phone,
    Email,
    IsMinor,
    GuardianName,
    GuardianPhone,
    GuardianEmail,
    InsuranceProvider,
    InsurancePolicyNumber,
    SubmittedAt,
    ConfirmedAt,
    CreatedAt,
    UpdatedAt,
}
