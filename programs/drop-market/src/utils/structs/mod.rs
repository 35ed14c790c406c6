//! Structs for the drop marketplace program. Often used within an account.
pub mod campaign_status;

pub use campaign_status::*;
