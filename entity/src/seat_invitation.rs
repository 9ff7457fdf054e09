use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seat_invitation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub seat_id: i32,
    pub expires_at: DateTimeUtc,
    /// Set exactly once, together with `claimed_student_id`, when the
    /// invitation is redeemed. Rows are kept for audit and never deleted.
    pub claimed_at: Option<DateTimeUtc>,
    pub claimed_student_id: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_seat::Entity",
        from = "Column::SeatId",
        to = "super::order_seat::Column::Id"
    )]
    OrderSeat,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::ClaimedStudentId",
        to = "super::student::Column::Id"
    )]
    Student,
}

impl Related<super::order_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderSeat.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
