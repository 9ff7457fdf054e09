//! HTTP request handlers.
//!
//! Controllers extract and validate the request shape, run the auth guard
//! where the route is instructor-facing, delegate to the service layer, and
//! convert the result into a response DTO. No business rules live here.

pub mod analysis;
pub mod auth;
pub mod invitation;
pub mod lesson;
pub mod seat;
