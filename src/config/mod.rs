pub mod app;
pub mod booking;
pub mod env;
