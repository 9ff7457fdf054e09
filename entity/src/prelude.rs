pub use super::audit_log::Entity as AuditLog;
pub use super::instructor::Entity as Instructor;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_analysis::Entity as LessonAnalysis;
pub use super::order_seat::Entity as OrderSeat;
pub use super::seat_identity_form::Entity as SeatIdentityForm;
pub use super::seat_invitation::Entity as SeatInvitation;
pub use super::student::Entity as Student;
