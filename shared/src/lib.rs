//! Shared constants and errors for the drop marketplace program.
//!
//! # Modules
//!
//! * `constants` - Seed tags and protocol constants.
//! * `errors` - Errors for the drop marketplace program.
//! * `utils` - Fee math utilities.
pub mod constants;
pub mod errors;
pub mod utils;
