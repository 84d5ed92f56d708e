pub mod schema;
pub mod kv_repo;
