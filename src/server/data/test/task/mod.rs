use crate::server::data::task::TaskRepository;
use entity::enums::TaskStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod set_status;
