mod collections;
mod file_store;
mod repository;

pub use self::collections::*;
pub use self::file_store::*;
pub use self::repository::*;
