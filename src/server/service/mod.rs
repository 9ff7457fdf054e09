//! Business logic layer.
//!
//! Services orchestrate repositories and own every lifecycle rule: invitation
//! issuing and expiry, the atomic claim transition, identity form locking,
//! lesson/seat creation, and analysis sharing. Controllers stay thin and call
//! into this layer; the data layer below stays free of business decisions.

pub mod analysis;
pub mod audit;
pub mod auth;
pub mod claim;
pub mod code;
pub mod identity_form;
pub mod invitation;
pub mod lesson;
