pub mod config;
pub mod content;
pub mod db;
pub mod i18n;
pub mod routes;
pub mod types;
pub mod utils;
