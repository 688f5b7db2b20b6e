use moodmeet_user::RegisterInput;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);

    cmd.register(RegisterInput {
        email: "john.doe@moodmeet.localhost".to_owned(),
        password: "my_password".to_owned(),
        name: "John".to_owned(),
    })
    .await?;

    let user_2 = cmd
        .register(RegisterInput {
            email: "John.Doe@moodmeet.localhost".to_owned(),
            password: "my_password_v2".to_owned(),
            name: "Johnny".to_owned(),
        })
        .await;

    assert_eq!(
        user_2.unwrap_err().to_string(),
        "Email already exists".to_owned()
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_duplicate_register_reports_existing_email() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);

    let mut handles = Vec::new();
    for i in 0..4 {
        let cmd = cmd.clone();
        handles.push(tokio::spawn(async move {
            cmd.register(RegisterInput {
                email: "race@moodmeet.localhost".to_owned(),
                password: format!("my_password_{i}"),
                name: "Racer".to_owned(),
            })
            .await
        }));
    }

    let mut registered = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => registered += 1,
            Err(moodmeet_shared::Error::Server(msg)) => assert_eq!(msg, "Email already exists"),
            Err(err) => panic!("unexpected error: {err:?}"),
        }
    }

    assert_eq!(registered, 1);

    Ok(())
}

#[tokio::test]
async fn validate_required_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);

    let result = cmd
        .register(RegisterInput {
            email: "jane@moodmeet.localhost".to_owned(),
            password: "secret".to_owned(),
            name: String::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(moodmeet_shared::Error::Validate(_))
    ));

    let result = cmd
        .register(RegisterInput {
            email: "not-an-email".to_owned(),
            password: "secret".to_owned(),
            name: "Jane".to_owned(),
        })
        .await;

    assert!(matches!(
        result,
        Err(moodmeet_shared::Error::Validate(_))
    ));

    Ok(())
}

#[tokio::test]
async fn register_assigns_increasing_ids() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = moodmeet_user::Command(pool);

    let first = helpers::create_user(&cmd, "first").await?;
    let second = helpers::create_user(&cmd, "second").await?;

    assert!(first > 0);
    assert!(second > first);

    let profile = cmd.profile(second).await?.unwrap();
    assert_eq!(profile.email, "second@moodmeet.localhost");
    assert_eq!(profile.name.as_deref(), Some("second"));

    Ok(())
}
