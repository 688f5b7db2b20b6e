use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Icebreaker;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Icebreaker::Table)
        .col(
            ColumnDef::new(Icebreaker::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Icebreaker::Question).text().not_null())
        .col(ColumnDef::new(Icebreaker::Category).string().string_len(100).null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Icebreaker::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
