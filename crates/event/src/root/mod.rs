use sqlx::SqlitePool;

mod icebreaker;
mod import;
mod interested;
mod list;
mod seed;

pub use import::ImportReport;
pub use interested::CLICKED_INTERESTED;

/// Event commands and queries over the application database.
#[derive(Clone)]
pub struct Command(pub SqlitePool);
