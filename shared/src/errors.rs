//! Error codes for the program.
//!
//! Custom error for Anchor programs start at 6000. i.e. here Unauthorized error would be 6000 and
//! InvalidFeeBps would be 6001.

use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid fee basis points")]
    InvalidFeeBps,

    #[msg("Invalid campaign name")]
    InvalidName,

    #[msg("Invalid campaign uri")]
    InvalidUri,

    #[msg("Invalid goal orders")]
    InvalidGoal,

    #[msg("Invalid price")]
    InvalidPrice,

    #[msg("Invalid allowed units per supporter")]
    InvalidAllowedUnits,

    #[msg("Invalid timestamps")]
    InvalidTimestamps,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Unit ordered exceeds allowed units per supporter or is zero")]
    InvalidUnitsOrdered,

    #[msg("Campaign not active")]
    CampaignNotActive,

    #[msg("Campaign is finalized")]
    CampaignFinalized,

    #[msg("Too early to finalize")]
    TooEarlyToFinalize,

    #[msg("Campaign not successful")]
    CampaignNotSuccessful,

    #[msg("Cannot refund from an already successful campaign")]
    CampaignSuccessful,

    #[msg("Already withdrawn")]
    AlreadyWithdrawn,

    #[msg("Already refunded")]
    AlreadyRefunded,

    #[msg("Insufficient balance")]
    InsufficientBalance,

    #[msg("Math overflow")]
    MathOverflow,
}

/// Check a condition and return an error if it is not met.
///
/// # Arguments
/// * `condition` - The condition to check.
/// * `error` - The error to return if the condition is not met.
#[macro_export]
macro_rules! check_condition {
    ($condition:expr, $error:expr) => {
        if !$condition {
            return Err(error!(ErrorCode::$error));
        }
    };
}
