pub mod accounts;
pub mod structs;

pub use accounts::*;
pub use structs::*;
