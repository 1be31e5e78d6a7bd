pub mod cricket_handler;
pub mod health_handler;
