pub mod config;
pub mod delete;
pub mod events;
pub mod month;
pub mod new;
