pub mod deeplink;
pub mod routes;

pub use deeplink::*;
pub use routes::*;
