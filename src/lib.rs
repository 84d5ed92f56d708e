pub mod error;
pub mod config;
pub mod validation;
pub mod model;
pub mod reference;
pub mod db;
pub mod migrate;
pub mod store;
pub mod ops;
pub mod queries;
pub mod cli;
