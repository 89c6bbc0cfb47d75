pub mod messages_view;
pub mod presenter;
pub mod table;
pub mod users_view;
