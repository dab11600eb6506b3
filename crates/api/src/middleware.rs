/// Error-to-response mapping
pub mod error_handling;
