use crate::server::data::audit::{AuditLogRepository, UserLogRepository};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_filtered;
mod record_logout;
