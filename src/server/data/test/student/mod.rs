use crate::server::data::student::StudentRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod find_or_create;
