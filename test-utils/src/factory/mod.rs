//! Factories for creating test entities with sensible defaults.
//!
//! Each factory inserts one entity into the test database. Dependencies are
//! not created implicitly; use the helper functions in `helpers` when a full
//! entity hierarchy is needed.

pub mod helpers;
pub mod identity_form;
pub mod instructor;
pub mod invitation;
pub mod lesson;
pub mod seat;
pub mod student;
