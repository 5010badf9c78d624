use crate::server::data::diarist::DiaristRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
