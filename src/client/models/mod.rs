pub mod app_state;
pub mod entities;
pub mod messages;
