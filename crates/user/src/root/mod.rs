use sqlx::SqlitePool;

mod login;
mod preferences;
mod profile;
mod quiz;
mod register;

pub use login::LoginInput;
pub use preferences::EVENT_CATEGORY_KEY;
pub use quiz::QuizAnswerInput;
pub use register::RegisterInput;

/// User commands and queries over the application database.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
