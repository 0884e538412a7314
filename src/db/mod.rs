pub mod groups;
pub mod postgres_service;
pub mod quests;
pub mod user;
