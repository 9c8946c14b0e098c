use crate::server::data::splitter::SplitterRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod port_totals;
mod set_used_ports;
