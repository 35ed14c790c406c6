use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::MAX_FEE_BASIS_POINTS;
use shared::errors::ErrorCode;
use shared::utils::{split_fee, FeeSplit};

use crate::state::MarketplaceConfig;

impl MarketplaceConfig {
    /// Both rates are fixed at creation, there is no update instruction.
    pub fn validate_fee_rates(commit_fees_bps: u16, withdraw_fees_bps: u16) -> Result<()> {
        check_condition!(commit_fees_bps <= MAX_FEE_BASIS_POINTS, InvalidFeeBps);

        check_condition!(withdraw_fees_bps <= MAX_FEE_BASIS_POINTS, InvalidFeeBps);

        Ok(())
    }

    /// Split a preorder's gross amount at the commit rate.
    pub fn split_commit_amount(&self, gross_amount: u64) -> Result<FeeSplit> {
        split_fee(gross_amount, self.commit_fees_bps)
    }

    /// Split the vault balance released to the creator at the withdraw rate.
    pub fn split_withdraw_amount(&self, gross_amount: u64) -> Result<FeeSplit> {
        split_fee(gross_amount, self.withdraw_fees_bps)
    }
}
