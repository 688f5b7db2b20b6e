pub mod password;
pub(crate) mod repository;
mod root;

pub use root::*;
