use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson_analysis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub seat_id: i32,
    pub instructor_id: i32,
    pub rating: i32,
    pub notes: String,
    /// Shared analyses are readable by instructors other than the author.
    pub shared: bool,
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
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,
}

impl Related<super::order_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderSeat.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
