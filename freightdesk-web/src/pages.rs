pub mod booking;
pub mod intake;
pub mod not_found;
pub mod schedule;
