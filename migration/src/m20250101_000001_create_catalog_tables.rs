use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

// No UNIQUE constraints and no foreign keys here: title uniqueness and the
// one-rating-per-movie rule are checked in the query layer, and membership
// rows may reference ids the client made up.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(pk_auto(Movies::Id))
                    .col(string(Movies::Title))
                    .col(string(Movies::Director))
                    .col(integer(Movies::ReleaseYear))
                    .col(string(Movies::Genre))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Watchlist::Table)
                    .if_not_exists()
                    .col(integer(Watchlist::MovieId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Watched::Table)
                    .if_not_exists()
                    .col(integer(Watched::MovieId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(integer(Ratings::MovieId))
                    .col(double(Ratings::Rating))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ratings::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Watched::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Watchlist::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
    Title,
    Director,
    ReleaseYear,
    Genre,
}

#[derive(DeriveIden)]
enum Watchlist {
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum Watched {
    Table,
    MovieId,
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    MovieId,
    Rating,
}
