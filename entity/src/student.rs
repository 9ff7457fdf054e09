use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_seat::Entity")]
    OrderSeat,
    #[sea_orm(has_many = "super::seat_invitation::Entity")]
    SeatInvitation,
}

impl Related<super::seat_invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatInvitation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
