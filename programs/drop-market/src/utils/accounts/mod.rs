pub mod drop_campaign;
pub mod marketplace_config;
pub mod supporter_account;

pub use drop_campaign::*;
pub use marketplace_config::*;
pub use supporter_account::*;
