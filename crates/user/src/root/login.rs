use validator::Validate;

use crate::{password, repository};

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> moodmeet_shared::Result<i64> {
        input.validate()?;

        let email = super::normalize_email(&input.email);

        let Some(row) = repository::find_credentials(&self.0, &email).await? else {
            return Err(moodmeet_shared::Error::InvalidCredentials);
        };

        let Some(hash) = row.password_hash else {
            return Err(moodmeet_shared::Error::InvalidCredentials);
        };

        if !password::verify_password(&input.password, &hash)? {
            tracing::debug!(user_id = row.id, "password mismatch");

            return Err(moodmeet_shared::Error::InvalidCredentials);
        }

        Ok(row.id)
    }
}
