//! Reference-data resources: EPS insurers and medical specialties.

pub mod eps;
pub mod especialidades;

pub use eps::*;
pub use especialidades::*;
