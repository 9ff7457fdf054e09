use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lesson")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub instructor_id: i32,
    pub title: String,
    pub resort: String,
    /// "ski" or "snowboard".
    pub discipline: String,
    pub lesson_time: DateTimeUtc,
    pub seat_count: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id"
    )]
    Instructor,
    #[sea_orm(has_many = "super::order_seat::Entity")]
    OrderSeat,
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::order_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderSeat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
