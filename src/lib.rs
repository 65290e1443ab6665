pub mod core;
pub mod models;
pub mod identity;
pub mod payload;
pub mod compose;
pub mod roster;
pub mod verify;
pub mod issuance;
pub mod security;
pub mod metrics;
pub mod utils;
pub mod handlers;
