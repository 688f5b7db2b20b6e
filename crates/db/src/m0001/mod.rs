mod event;
mod icebreaker;
mod interested;
mod user;
mod user_event_log;
mod user_preference;
mod user_quiz_answer;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "moodmeet",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        event::CreateTable,
        event::CreateIdx1,
        interested::CreateTable,
        interested::CreateUk1,
        user_preference::CreateTable,
        user_preference::CreateIdx1,
        user_quiz_answer::CreateTable,
        user_event_log::CreateTable,
        icebreaker::CreateTable
    ]
);
