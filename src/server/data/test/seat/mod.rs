use crate::server::data::seat::SeatRepository;
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_for_lesson;
mod mark_claimed;
mod mark_confirmed;
