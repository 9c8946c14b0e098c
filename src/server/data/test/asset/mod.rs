use crate::server::{data::asset::AssetRepository, model::asset::CreateAssetParams};
use entity::enums::{AssetStatus, AssetType};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_available_by_type;
mod find_by_serial;
mod mark_assigned;
