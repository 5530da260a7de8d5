pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod output;
pub mod services;
pub mod utils;
