pub mod landing;
pub mod messages;
pub mod users;
