pub mod auth;
pub mod domain;
pub mod error;

pub use auth::*;
pub use domain::*;
pub use error::*;
