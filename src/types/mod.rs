pub mod error;
pub mod group;
pub mod response;
pub mod user;
