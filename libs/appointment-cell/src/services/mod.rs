pub mod lifecycle;
pub mod slots;
pub mod validation;

pub use lifecycle::*;
pub use slots::*;
pub use validation::*;
