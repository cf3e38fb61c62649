use sea_orm_migration::prelude::*;

/// Creates the `draft_pick` table recording which player a team took at each pick.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum DraftPick {
    Table,
    Id,
    DraftId,
    RoundNum,
    PickNum,
    TeamNum,
    PlayerId,
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DraftPick::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DraftPick::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DraftPick::DraftId).integer().not_null())
                    .col(ColumnDef::new(DraftPick::RoundNum).integer().not_null())
                    .col(ColumnDef::new(DraftPick::PickNum).integer().not_null())
                    .col(ColumnDef::new(DraftPick::TeamNum).integer().not_null())
                    .col(ColumnDef::new(DraftPick::PlayerId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_draft_pick_player_id")
                            .from(DraftPick::Table, DraftPick::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_draft_pick_draft_id")
                    .table(DraftPick::Table)
                    .col(DraftPick::DraftId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DraftPick::Table).to_owned())
            .await
    }
}
