pub mod client;
pub mod models;
pub mod users;

pub use client::*;
pub use models::*;
pub use users::*;
