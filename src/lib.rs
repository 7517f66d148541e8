pub mod config;
pub mod db;
pub mod handlers;
pub mod services;
pub mod types;
pub mod utils;
