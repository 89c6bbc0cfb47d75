pub mod config;
pub mod gui;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodel;
