use crate::server::data::schedule::ScheduleRepository;
use entity::sea_orm_active_enums::ScheduleStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod transition_status;
