use crate::server::{data::customer::CustomerRepository, model::customer::CreateCustomerParams};
use entity::enums::CustomerStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_splitter;
mod set_splitter_port;
