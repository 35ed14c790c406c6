use anchor_lang::prelude::*;

use crate::check_condition;
use crate::constants::MAX_FEE_BASIS_POINTS;
use crate::errors::ErrorCode;
use crate::errors::ErrorCode::MathOverflow;

/// A gross token amount split into the protocol fee slice and the net remainder.
///
/// `fee_amount + net_amount` always reconstructs the gross amount exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee_amount: u64,
    pub net_amount: u64,
}

/// Calculate the fee taken from a gross amount at the given basis point rate.
/// The fee rounds down, the remainder stays with the paying side.
///
/// # Arguments
/// * `gross_amount` - The gross token amount the rate applies to.
/// * `fee_bps` - The fee rate in basis points.
pub fn calculate_fee_amount(gross_amount: u64, fee_bps: u16) -> Result<u64> {
    check_condition!(fee_bps <= MAX_FEE_BASIS_POINTS, InvalidFeeBps);

    let scaled_fee = (gross_amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(MathOverflow)?
        .checked_div(MAX_FEE_BASIS_POINTS as u128)
        .ok_or(MathOverflow)?;

    u64::try_from(scaled_fee).map_err(|_| error!(MathOverflow))
}

/// Split a gross amount into its fee and net parts.
///
/// # Arguments
/// * `gross_amount` - The gross token amount to split.
/// * `fee_bps` - The fee rate in basis points.
pub fn split_fee(gross_amount: u64, fee_bps: u16) -> Result<FeeSplit> {
    let fee_amount = calculate_fee_amount(gross_amount, fee_bps)?;
    let net_amount = gross_amount.checked_sub(fee_amount).ok_or(MathOverflow)?;

    Ok(FeeSplit {
        fee_amount,
        net_amount,
    })
}
