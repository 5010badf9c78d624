use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::ScheduleStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub diarist_id: String,
    pub address_id: String,
    pub date: DateTimeUtc,
    pub price: i32,
    pub status: ScheduleStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::diarist::Entity",
        from = "Column::DiaristId",
        to = "super::diarist::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Diarist,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::diarist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diarist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
