pub mod client;
pub mod normalize;
pub mod token;

pub use client::*;
pub use normalize::*;
pub use token::*;
