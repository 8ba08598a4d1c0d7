//! Handlers rendering HTML pages.

pub mod home;

pub use home::home_handler;
