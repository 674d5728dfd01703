use entity::schedules::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(schedules::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(schedules::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(schedules::Column::ExamType)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::Subject)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::DayOfWeek)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::Time)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::IsOnline)
                            .boolean()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::MeetingLink)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(schedules::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SCHEDULES)
                            .col(schedules::Column::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(schedules::Entity).to_owned())
            .await
    }
}
