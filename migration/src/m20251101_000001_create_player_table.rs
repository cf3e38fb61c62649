use sea_orm_migration::prelude::*;

/// Creates the `player` table holding draftable reference players.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    Name,
    Team,
    Position,
    RankOverall,
    RankPosition,
    ProjectedPoints,
}

/// Codes accepted by the `position` column check constraint.
const POSITION_CODES: [&str; 6] = ["QB", "RB", "WR", "TE", "DEF", "K"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Player::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Player::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Player::Team).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Player::Position)
                            .string_len(3)
                            .not_null()
                            .check(Expr::col(Player::Position).is_in(POSITION_CODES)),
                    )
                    .col(ColumnDef::new(Player::RankOverall).integer().not_null())
                    .col(ColumnDef::new(Player::RankPosition).integer().not_null())
                    .col(ColumnDef::new(Player::ProjectedPoints).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_position")
                    .table(Player::Table)
                    .col(Player::Position)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}
