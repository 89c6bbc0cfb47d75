pub mod alert;
pub mod card;
