use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::UserQuizAnswer;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(UserQuizAnswer::Table)
        .col(
            ColumnDef::new(UserQuizAnswer::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(UserQuizAnswer::UserId).integer().not_null())
        .col(
            ColumnDef::new(UserQuizAnswer::Question)
                .string()
                .string_len(500)
                .not_null(),
        )
        .col(
            ColumnDef::new(UserQuizAnswer::Answer)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(UserQuizAnswer::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(UserQuizAnswer::Table).to_owned()
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
