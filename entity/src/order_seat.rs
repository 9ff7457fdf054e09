use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_seat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lesson_id: i32,
    pub seat_number: i32,
    /// "open", "claimed" or "confirmed". Transitions are monotonic.
    pub status: String,
    pub claimed_student_id: Option<i32>,
    pub claimed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id"
    )]
    Lesson,
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::ClaimedStudentId",
        to = "super::student::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::seat_invitation::Entity")]
    SeatInvitation,
    #[sea_orm(has_one = "super::seat_identity_form::Entity")]
    SeatIdentityForm,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::seat_invitation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatInvitation.def()
    }
}

impl Related<super::seat_identity_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatIdentityForm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
