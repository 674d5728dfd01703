use entity::contacts::{self, constraints::*};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(contacts::Entity)
                    .if_not_exists()
                    .col(ColumnDef::new(contacts::Column::Id).uuid().not_null())
                    .col(
                        ColumnDef::new(contacts::Column::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contacts::Column::Phone)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contacts::Column::Email)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(contacts::Column::CourseInterested)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(contacts::Column::Message).string().null())
                    .col(
                        ColumnDef::new(contacts::Column::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(Index::create().name(PK_CONTACTS).col(contacts::Column::Id))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(contacts::Entity).to_owned())
            .await
    }
}
