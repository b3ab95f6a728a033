pub mod client;
pub mod models;
pub mod services;

pub use client::*;
pub use models::*;
pub use services::*;
