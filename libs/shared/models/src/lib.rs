pub mod domain;
pub mod error;
pub mod snapshot;

pub use domain::*;
pub use error::*;
pub use snapshot::*;
