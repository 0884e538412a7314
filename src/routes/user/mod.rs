pub mod create;
pub mod current;
