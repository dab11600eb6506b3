//! # Slotbook Core
//!
//! Domain logic for the appointment booking service, shared by the
//! persistence and API crates. Everything in here is pure: slot-grid
//! generation, booking-payload validation, the error taxonomy, and the
//! request/response models. No I/O happens in this crate.

/// Booking request validation
pub mod booking;
/// Error taxonomy with stable wire codes
pub mod errors;
/// Domain and API models
pub mod models;
/// Slot grid generation and availability set difference
pub mod slots;
