use crate::server::{data::task_checklist::ChecklistRepository, model::task::ChecklistItemParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;
mod seed;
