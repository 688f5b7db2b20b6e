mod error;
pub mod event;
mod mood;
pub mod preference;
pub mod quiz;
pub mod user;

pub use error::*;
pub use mood::Mood;
