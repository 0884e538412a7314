pub mod accept;
pub mod invite;
pub mod reject;
