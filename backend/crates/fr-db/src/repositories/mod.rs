pub mod in_memory_repository;
mod schema;
pub mod sqlite_repository;
