pub mod admin;
pub mod fallback;
pub mod health;
pub mod membercheck;
pub mod metrics;
pub mod pages;
