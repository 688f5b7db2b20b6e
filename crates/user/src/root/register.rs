use validator::Validate;

use crate::{password, repository};

#[derive(Validate)]
pub struct RegisterInput {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> moodmeet_shared::Result<i64> {
        input.validate()?;

        let email = super::normalize_email(&input.email);

        if repository::find_credentials(&self.0, &email).await?.is_some() {
            moodmeet_shared::bail!("Email already exists");
        }

        let password_hash = password::hash_password(&input.password)?;
        let id = repository::create(&self.0, email, input.name.trim().to_owned(), password_hash)
            .await?;

        tracing::info!(user_id = id, "user registered");

        Ok(id)
    }
}
