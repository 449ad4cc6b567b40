use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create participants table
        manager
            .create_table(
                Table::create()
                    .table(Participants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participants::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Participants::Name)
                            .string()
                            .not_null()
                            .check(Expr::cust("length(name) >= 2")),
                    )
                    .col(ColumnDef::new(Participants::Age).integer())
                    .to_owned(),
            )
            .await?;

        // Create animators table
        manager
            .create_table(
                Table::create()
                    .table(Animators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Animators::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Animators::Name)
                            .string()
                            .not_null()
                            .check(Expr::cust("length(name) >= 2")),
                    )
                    .col(
                        ColumnDef::new(Animators::Conversations)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;

        // Create groups table
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Groups::Id).string().not_null().primary_key())
                    .col(
                        ColumnDef::new(Groups::Name)
                            .string()
                            .not_null()
                            .check(Expr::cust("length(name) >= 2")),
                    )
                    .col(
                        ColumnDef::new(Groups::ParticipantIds)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(Groups::AnimatorIds)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_groups_name")
                    .table(Groups::Table)
                    .col(Groups::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Animators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participants::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Participants {
    Table,
    Id,
    Name,
    Age,
}

#[derive(Iden)]
enum Animators {
    Table,
    Id,
    Name,
    Conversations,
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    Name,
    ParticipantIds,
    AnimatorIds,
}
