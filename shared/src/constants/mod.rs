pub mod common;
pub mod seeds;

pub use common::*;
pub use seeds::*;
