use moodmeet_db::table::{User, UserPreference, UserQuizAnswer};
use moodmeet_shared::user::{Profile, ProfileUpdate};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;

#[derive(FromRow)]
pub struct CredentialRow {
    pub id: i64,
    pub password_hash: Option<String>,
}

#[derive(FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub email: String,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub bio: Option<String>,
    pub social_links: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
    pub interests: Option<String>,
    pub profile_image: Option<String>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            age: row.age,
            gender: row.gender,
            dob: row.dob,
            bio: row.bio,
            social_links: row.social_links,
            lat: row.lat,
            lon: row.lon,
            city: row.city,
            interests: row.interests,
            profile_image: row.profile_image,
        }
    }
}

pub(crate) async fn find_credentials(
    pool: &SqlitePool,
    email: &str,
) -> moodmeet_shared::Result<Option<CredentialRow>> {
    let statement = Query::select()
        .columns([User::Id, User::PasswordHash])
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CredentialRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn find_profile(
    pool: &SqlitePool,
    id: i64,
) -> moodmeet_shared::Result<Option<ProfileRow>> {
    let statement = Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Name,
            User::Age,
            User::Gender,
            User::Dob,
            User::Bio,
            User::SocialLinks,
            User::Lat,
            User::Lon,
            User::City,
            User::Interests,
            User::ProfileImage,
        ])
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ProfileRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn exists(pool: &SqlitePool, id: i64) -> moodmeet_shared::Result<bool> {
    let statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}

pub(crate) async fn create(
    pool: &SqlitePool,
    email: String,
    name: String,
    password_hash: String,
) -> moodmeet_shared::Result<i64> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([User::Email, User::Name, User::PasswordHash, User::CreatedAt])
        .values_panic([email.into(), name.into(), password_hash.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    match sqlx::query_with(&sql, values).execute(pool).await {
        Ok(result) => Ok(result.last_insert_rowid()),
        Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
            Err(moodmeet_shared::Error::Server("Email already exists".to_owned()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Returns `false` when no field was present and nothing was written.
/// A present `None` writes NULL.
pub(crate) async fn update(
    pool: &SqlitePool,
    input: ProfileUpdate,
) -> moodmeet_shared::Result<bool> {
    let mut statement = Query::update()
        .table(User::Table)
        .and_where(Expr::col(User::Id).eq(input.user_id))
        .to_owned();

    let mut changed = false;

    if let Some(name) = input.name {
        statement.value(User::Name, name);
        changed = true;
    }

    if let Some(age) = input.age {
        statement.value(User::Age, age);
        changed = true;
    }

    if let Some(gender) = input.gender {
        statement.value(User::Gender, gender);
        changed = true;
    }

    if let Some(dob) = input.dob {
        statement.value(User::Dob, dob);
        changed = true;
    }

    if let Some(bio) = input.bio {
        statement.value(User::Bio, bio);
        changed = true;
    }

    if let Some(social_links) = input.social_links {
        statement.value(User::SocialLinks, social_links);
        changed = true;
    }

    if let Some(lat) = input.lat {
        statement.value(User::Lat, lat);
        changed = true;
    }

    if let Some(lon) = input.lon {
        statement.value(User::Lon, lon);
        changed = true;
    }

    if let Some(city) = input.city {
        statement.value(User::City, city);
        changed = true;
    }

    if let Some(interests) = input.interests {
        statement.value(User::Interests, interests);
        changed = true;
    }

    if !changed {
        return Ok(false);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(true)
}

pub(crate) async fn set_profile_image(
    pool: &SqlitePool,
    id: i64,
    path: String,
) -> moodmeet_shared::Result<()> {
    let statement = Query::update()
        .table(User::Table)
        .value(User::ProfileImage, path)
        .and_where(Expr::col(User::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Replaces every preference row of `user_id` with `rows` (category, choice).
pub(crate) async fn replace_preferences(
    pool: &SqlitePool,
    user_id: i64,
    rows: Vec<(String, String)>,
) -> moodmeet_shared::Result<()> {
    let mut tx = pool.begin().await?;

    let statement = Query::delete()
        .from_table(UserPreference::Table)
        .and_where(Expr::col(UserPreference::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *tx).await?;

    if !rows.is_empty() {
        let mut statement = Query::insert()
            .into_table(UserPreference::Table)
            .columns([
                UserPreference::UserId,
                UserPreference::Category,
                UserPreference::Choice,
            ])
            .to_owned();

        for (category, choice) in rows {
            statement.values_panic([user_id.into(), category.into(), choice.into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    Ok(())
}

pub(crate) async fn find_preferences(
    pool: &SqlitePool,
    user_id: i64,
) -> moodmeet_shared::Result<Vec<(String, String)>> {
    let statement = Query::select()
        .columns([UserPreference::Category, UserPreference::Choice])
        .from(UserPreference::Table)
        .and_where(Expr::col(UserPreference::UserId).eq(user_id))
        .order_by(UserPreference::Category, sea_query::Order::Asc)
        .order_by(UserPreference::Choice, sea_query::Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, (String, String), _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub(crate) async fn create_quiz_answer(
    pool: &SqlitePool,
    user_id: i64,
    question: String,
    answer: String,
) -> moodmeet_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(UserQuizAnswer::Table)
        .columns([
            UserQuizAnswer::UserId,
            UserQuizAnswer::Question,
            UserQuizAnswer::Answer,
            UserQuizAnswer::CreatedAt,
        ])
        .values_panic([user_id.into(), question.into(), answer.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
