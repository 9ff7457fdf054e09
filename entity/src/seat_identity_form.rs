use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seat_identity_form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub seat_id: i32,
    /// "draft", "submitted" or "confirmed". Once confirmed the form is
    /// immutable through the public interface.
    pub status: String,
    pub student_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_minor: bool,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
    pub submitted_at: Option<DateTimeUtc>,
    pub confirmed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order_seat::Entity",
        from = "Column::SeatId",
        to = "super::order_seat::Column::Id"
    )]
    OrderSeat,
}

impl Related<super::order_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderSeat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
