pub mod dates;
pub mod rut;
