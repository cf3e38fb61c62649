use sea_orm_migration::prelude::*;

/// Creates the `draft_settings` table describing a draft's format and roster slots.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DraftSettings {
    Table,
    Id,
    DraftType,
    NumTeams,
    DraftPosition,
    IsRandomPosition,
    QbCount,
    RbCount,
    WrCount,
    TeCount,
    FlexCount,
    DefCount,
    KCount,
    BenchCount,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DraftSettings::DraftType)
                            .string_len(50)
                            .not_null()
                            .default("snake"),
                    )
                    .col(
                        ColumnDef::new(DraftSettings::NumTeams)
                            .integer()
                            .not_null()
                            .default(10),
                    )
                    .col(ColumnDef::new(DraftSettings::DraftPosition).integer().null())
                    // Stored as 0/1 rather than a native boolean.
                    .col(
                        ColumnDef::new(DraftSettings::IsRandomPosition)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(slot_column(DraftSettings::QbCount, 1))
                    .col(slot_column(DraftSettings::RbCount, 2))
                    .col(slot_column(DraftSettings::WrCount, 2))
                    .col(slot_column(DraftSettings::TeCount, 1))
                    .col(slot_column(DraftSettings::FlexCount, 1))
                    .col(slot_column(DraftSettings::DefCount, 1))
                    .col(slot_column(DraftSettings::KCount, 1))
                    .col(slot_column(DraftSettings::BenchCount, 6))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DraftSettings::Table).to_owned())
            .await
    }
}

fn slot_column(column: DraftSettings, default: i32) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .default(default)
        .to_owned()
}
