pub mod categorize;
pub mod icebreaker;
pub(crate) mod repository;
mod root;
pub mod serpapi;

pub use root::*;
