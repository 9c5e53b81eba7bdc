use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visitors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visitors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Visitors::IpHash).string_len(64).not_null())
                    .col(
                        ColumnDef::new(Visitors::VisitedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Visitors::VisitDate).string_len(10).not_null())
                    .to_owned(),
            )
            .await?;

        // One row per identity per day
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_visitors_ip_hash_visit_date")
                    .table(Visitors::Table)
                    .col(Visitors::IpHash)
                    .col(Visitors::VisitDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_visitors_visit_date")
                    .table(Visitors::Table)
                    .col(Visitors::VisitDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visitors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Visitors {
    Table,
    Id,
    IpHash,
    VisitedAt,
    VisitDate,
}
