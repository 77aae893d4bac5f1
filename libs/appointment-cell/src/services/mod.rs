pub mod booking;
pub mod conflict;
pub mod filters;
pub mod lifecycle;
