pub mod api_client;
pub mod message_service;
pub mod users_service;
