pub mod auth;
pub mod cache;
pub mod catalog;
pub mod error;
pub mod services;
pub mod settings;
pub mod traits;
pub mod validation;
