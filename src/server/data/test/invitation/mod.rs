use crate::server::data::invitation::InvitationRepository;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expire_open_for_seat;
mod find_by_code;
mod mark_claimed;
