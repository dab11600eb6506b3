/// Availability queries (free times, ranged slots)
pub mod availability;
/// Booking intake
pub mod booking;
/// Public business information
pub mod business;
