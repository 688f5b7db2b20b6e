use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserEventLog;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserEventLog::Table)
        .col(
            ColumnDef::new(UserEventLog::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(UserEventLog::UserId).integer().not_null())
        .col(ColumnDef::new(UserEventLog::EventId).integer().not_null())
        .col(
            ColumnDef::new(UserEventLog::Action)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(ColumnDef::new(UserEventLog::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserEventLog::Table).to_owned()
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
