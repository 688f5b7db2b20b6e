use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn second_interest_is_acknowledged_without_increment() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_event::Command(pool.clone());
    cmd.seed_samples().await?;
    let user_id = helpers::create_user(&pool, "john@moodmeet.localhost").await?;

    assert!(!cmd.mark_interested(1, user_id).await?);
    assert_eq!(helpers::popularity(&pool, 1).await?, 1);

    assert!(cmd.mark_interested(1, user_id).await?);
    assert_eq!(helpers::popularity(&pool, 1).await?, 1);

    let logs: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM user_event_log WHERE user_id = ?1 AND action = ?2",
    )
    .bind(user_id)
    .bind(moodmeet_event::CLICKED_INTERESTED)
    .fetch_one(&pool)
    .await?;
    assert_eq!(logs, 1);

    Ok(())
}

#[tokio::test]
async fn interest_counts_each_user_once() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_event::Command(pool.clone());
    cmd.seed_samples().await?;
    let john = helpers::create_user(&pool, "john@moodmeet.localhost").await?;
    let jane = helpers::create_user(&pool, "jane@moodmeet.localhost").await?;

    cmd.mark_interested(2, john).await?;
    cmd.mark_interested(2, jane).await?;
    cmd.mark_interested(4, john).await?;

    assert_eq!(helpers::popularity(&pool, 2).await?, 2);

    let mut titles = cmd
        .interested_events(john)
        .await?
        .into_iter()
        .map(|e| e.title)
        .collect::<Vec<_>>();
    titles.sort();
    assert_eq!(titles, vec!["Lo-fi Coffee Meetup", "Open Mic - Chill Vibes"]);
    assert!(cmd.interested_events(999).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn interest_in_unknown_event_or_user_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_event::Command(pool.clone());
    cmd.seed_samples().await?;
    let user_id = helpers::create_user(&pool, "john@moodmeet.localhost").await?;

    assert!(matches!(
        cmd.mark_interested(42, user_id).await,
        Err(moodmeet_shared::Error::NotFound("Event"))
    ));
    assert!(matches!(
        cmd.mark_interested(1, 42).await,
        Err(moodmeet_shared::Error::NotFound("User"))
    ));
    assert_eq!(helpers::popularity(&pool, 1).await?, 0);

    Ok(())
}
