use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod constraints {
    pub const PK_SCHEDULES: &str = "PK_schedules";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub exam_type: String,
    pub subject: String,
    pub day_of_week: Day,
    pub time: String,
    pub is_online: bool,
    pub meeting_link: Option<String>,
    pub created_at: DateTimeUtc,
}

/// Stored as a small integer so the weekly listing can be ordered
/// Monday-first directly in the query.
#[derive(
    EnumIter, DeriveActiveEnum, PartialEq, Eq, Copy, Clone, Debug, Serialize, Deserialize,
)]
#[repr(i16)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Day {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
