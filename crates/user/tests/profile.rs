use moodmeet_shared::user::ProfileUpdate;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn update_only_touches_present_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);
    let id = helpers::create_user(&cmd, "john").await?;

    cmd.update_profile(ProfileUpdate {
        user_id: id,
        age: Some(Some(29)),
        gender: Some(Some("Male".to_owned())),
        lat: Some(Some(12.97)),
        lon: Some(Some(77.59)),
        ..Default::default()
    })
    .await?;

    let profile = cmd.profile(id).await?.unwrap();
    assert_eq!(profile.name.as_deref(), Some("john"));
    assert_eq!(profile.age, Some(29));
    assert_eq!(profile.gender.as_deref(), Some("Male"));
    assert_eq!(profile.lat, Some(12.97));
    assert_eq!(profile.lon, Some(77.59));
    assert_eq!(profile.bio, None);

    Ok(())
}

#[tokio::test]
async fn update_with_null_clears_field() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);
    let id = helpers::create_user(&cmd, "jane").await?;

    cmd.update_profile(ProfileUpdate {
        user_id: id,
        age: Some(Some(30)),
        gender: Some(Some("Female".to_owned())),
        ..Default::default()
    })
    .await?;

    cmd.update_profile(ProfileUpdate {
        user_id: id,
        age: Some(None),
        gender: Some(None),
        ..Default::default()
    })
    .await?;

    let profile = cmd.profile(id).await?.unwrap();
    assert_eq!(profile.age, None);
    assert_eq!(profile.gender, None);
    assert_eq!(profile.name.as_deref(), Some("jane"));

    Ok(())
}

#[tokio::test]
async fn update_unknown_user_is_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);

    let result = cmd
        .update_profile(ProfileUpdate {
            user_id: 42,
            name: Some(Some("ghost".to_owned())),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(moodmeet_shared::Error::NotFound("User"))
    ));
    assert!(cmd.profile(42).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn set_profile_image_stores_path() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);
    let id = helpers::create_user(&cmd, "john").await?;

    cmd.set_profile_image(id, "uploads/1_100_me.png".to_owned())
        .await?;

    let profile = cmd.profile(id).await?.unwrap();
    assert_eq!(
        profile.profile_image.as_deref(),
        Some("uploads/1_100_me.png")
    );

    Ok(())
}
