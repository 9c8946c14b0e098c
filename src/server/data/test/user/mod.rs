use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::enums::UserRole;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod find_by_username;
mod set_active;
