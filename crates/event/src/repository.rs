use moodmeet_db::table::{Event as EventTable, Icebreaker, Interested, User, UserEventLog};
use moodmeet_shared::event::Event;
use sea_query::{
    Expr, ExprTrait, Func, OnConflict, Order, Query, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

use crate::serpapi::ExternalEvent;

#[derive(FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub event_time: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub category: Option<String>,
    pub popularity: i64,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            location_name: row.location_name,
            event_time: row.event_time,
            lat: row.lat,
            lon: row.lon,
            category: row.category,
            popularity: row.popularity,
            match_percentage: None,
        }
    }
}

/// A new event row, either seeded or imported.
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub event_time: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub category: String,
}

fn select_events() -> SelectStatement {
    Query::select()
        .columns([
            (EventTable::Table, EventTable::Id),
            (EventTable::Table, EventTable::Title),
            (EventTable::Table, EventTable::Description),
            (EventTable::Table, EventTable::LocationName),
            (EventTable::Table, EventTable::EventTime),
            (EventTable::Table, EventTable::Lat),
            (EventTable::Table, EventTable::Lon),
            (EventTable::Table, EventTable::Category),
            (EventTable::Table, EventTable::Popularity),
        ])
        .from(EventTable::Table)
        .to_owned()
}

pub(crate) async fn list(
    pool: &SqlitePool,
    categories: Option<&[&str]>,
) -> moodmeet_shared::Result<Vec<EventRow>> {
    let mut statement = select_events();

    if let Some(categories) = categories {
        statement.and_where(
            Expr::col((EventTable::Table, EventTable::Category))
                .is_in(categories.iter().copied()),
        );
    }

    statement.order_by((EventTable::Table, EventTable::Id), Order::Asc);

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn list_by_interested_user(
    pool: &SqlitePool,
    user_id: i64,
) -> moodmeet_shared::Result<Vec<EventRow>> {
    let statement = select_events()
        .inner_join(
            Interested::Table,
            Expr::col((Interested::Table, Interested::EventId))
                .equals((EventTable::Table, EventTable::Id)),
        )
        .and_where(Expr::col((Interested::Table, Interested::UserId)).eq(user_id))
        .order_by((Interested::Table, Interested::CreatedAt), Order::Desc)
        .order_by((Interested::Table, Interested::Id), Order::Desc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn count(conn: &mut SqliteConnection) -> moodmeet_shared::Result<i64> {
    let statement = Query::select()
        .expr(Func::count(Expr::col(EventTable::Id)))
        .from(EventTable::Table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(conn)
        .await?)
}

pub(crate) async fn event_exists(
    conn: &mut SqliteConnection,
    id: i64,
) -> moodmeet_shared::Result<bool> {
    let statement = Query::select()
        .column(EventTable::Id)
        .from(EventTable::Table)
        .and_where(Expr::col(EventTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(conn)
        .await?
        .is_some())
}

pub(crate) async fn user_exists(
    conn: &mut SqliteConnection,
    id: i64,
) -> moodmeet_shared::Result<bool> {
    let statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(conn)
        .await?
        .is_some())
}

/// Returns `false` when the pair was already recorded.
pub(crate) async fn create_interested(
    conn: &mut SqliteConnection,
    event_id: i64,
    user_id: i64,
) -> moodmeet_shared::Result<bool> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(Interested::Table)
        .columns([Interested::EventId, Interested::UserId, Interested::CreatedAt])
        .values_panic([event_id.into(), user_id.into(), now.into()])
        .on_conflict(
            OnConflict::columns([Interested::EventId, Interested::UserId])
                .do_nothing()
                .to_owned(),
        )
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(result.rows_affected() > 0)
}

pub(crate) async fn increment_popularity(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> moodmeet_shared::Result<()> {
    let statement = Query::update()
        .table(EventTable::Table)
        .value(
            EventTable::Popularity,
            Expr::col(EventTable::Popularity).add(1),
        )
        .and_where(Expr::col(EventTable::Id).eq(event_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn create_log(
    conn: &mut SqliteConnection,
    user_id: i64,
    event_id: i64,
    action: &str,
) -> moodmeet_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(UserEventLog::Table)
        .columns([
            UserEventLog::UserId,
            UserEventLog::EventId,
            UserEventLog::Action,
            UserEventLog::CreatedAt,
        ])
        .values_panic([user_id.into(), event_id.into(), action.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn create_events(
    conn: &mut SqliteConnection,
    events: Vec<NewEvent>,
) -> moodmeet_shared::Result<()> {
    if events.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(EventTable::Table)
        .columns([
            EventTable::Title,
            EventTable::Description,
            EventTable::LocationName,
            EventTable::EventTime,
            EventTable::Lat,
            EventTable::Lon,
            EventTable::Category,
        ])
        .to_owned();

    for event in events {
        statement.values_panic([
            event.title.into(),
            event.description.into(),
            event.location_name.into(),
            event.event_time.into(),
            event.lat.into(),
            event.lon.into(),
            event.category.into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn find_imported(
    conn: &mut SqliteConnection,
    event: &ExternalEvent,
) -> moodmeet_shared::Result<Option<EventRow>> {
    let statement = select_events()
        .and_where(Expr::col((EventTable::Table, EventTable::Title)).eq(event.title.as_str()))
        .and_where(Expr::col((EventTable::Table, EventTable::Lat)).eq(event.lat))
        .and_where(Expr::col((EventTable::Table, EventTable::Lon)).eq(event.lon))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_optional(conn)
        .await?)
}

/// Fields to overwrite on an already imported event.
#[derive(Default)]
pub struct EventPatch {
    pub category: Option<String>,
    pub event_time: Option<String>,
    pub location_name: Option<String>,
    pub coordinates: Option<(f64, f64)>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.event_time.is_none()
            && self.location_name.is_none()
            && self.coordinates.is_none()
    }
}

pub(crate) async fn update_event(
    conn: &mut SqliteConnection,
    id: i64,
    patch: EventPatch,
) -> moodmeet_shared::Result<()> {
    if patch.is_empty() {
        return Ok(());
    }

    let mut statement = Query::update()
        .table(EventTable::Table)
        .and_where(Expr::col(EventTable::Id).eq(id))
        .to_owned();

    if let Some(category) = patch.category {
        statement.value(EventTable::Category, category);
    }

    if let Some(event_time) = patch.event_time {
        statement.value(EventTable::EventTime, event_time);
    }

    if let Some(location_name) = patch.location_name {
        statement.value(EventTable::LocationName, location_name);
    }

    if let Some((lat, lon)) = patch.coordinates {
        statement.value(EventTable::Lat, lat);
        statement.value(EventTable::Lon, lon);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}

pub(crate) async fn find_icebreakers(pool: &SqlitePool) -> moodmeet_shared::Result<Vec<String>> {
    let statement = Query::select()
        .column(Icebreaker::Question)
        .from(Icebreaker::Table)
        .order_by(Icebreaker::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn count_icebreakers(conn: &mut SqliteConnection) -> moodmeet_shared::Result<i64> {
    let statement = Query::select()
        .expr(Func::count(Expr::col(Icebreaker::Id)))
        .from(Icebreaker::Table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(conn)
        .await?)
}

pub(crate) async fn create_icebreakers(
    conn: &mut SqliteConnection,
    rows: &[(&str, &str)],
) -> moodmeet_shared::Result<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let mut statement = Query::insert()
        .into_table(Icebreaker::Table)
        .columns([Icebreaker::Question, Icebreaker::Category])
        .to_owned();

    for (question, category) in rows {
        statement.values_panic([(*question).into(), (*category).into()]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(conn).await?;

    Ok(())
}
