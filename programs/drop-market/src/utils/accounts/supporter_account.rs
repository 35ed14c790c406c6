use anchor_lang::prelude::*;
use shared::check_condition;
use shared::errors::ErrorCode;

use crate::state::SupporterAccount;

impl SupporterAccount {
    /// Fill in the identity fields of a freshly created supporter record.
    /// The account arrives zeroed from `init_if_needed` on the supporter's
    /// first order, on repeat orders the authority is already set.
    ///
    /// Returns true when this was the supporter's first order on the campaign.
    pub fn process_init_if_needed(
        &mut self,
        context_bump: u8,
        authority: &Pubkey,
        drop_campaign: &Pubkey,
    ) -> Result<bool> {
        if self.authority != Pubkey::default() {
            return Ok(false);
        }

        self.bump = context_bump;
        self.authority = *authority;
        self.drop_campaign = *drop_campaign;

        Ok(true)
    }

    /// Apply a preorder to the cumulative record.
    ///
    /// Ordering zero units and exceeding the cap surface as the same error,
    /// the sub reason is only logged.
    pub fn record_order(
        &mut self,
        units_ordered: u32,
        amount_committed: u64,
        allowed_units_per_supporter: u32,
    ) -> Result<()> {
        if units_ordered == 0 {
            msg!("preorder rejected: zero units");
            return Err(error!(ErrorCode::InvalidUnitsOrdered));
        }

        let cumulative_units = self
            .units_ordered
            .checked_add(units_ordered)
            .ok_or(ErrorCode::MathOverflow)?;

        if cumulative_units > allowed_units_per_supporter {
            msg!(
                "preorder rejected: cumulative units {} exceed cap {}",
                cumulative_units,
                allowed_units_per_supporter
            );
            return Err(error!(ErrorCode::InvalidUnitsOrdered));
        }

        self.units_ordered = cumulative_units;
        self.amount_committed = self
            .amount_committed
            .checked_add(amount_committed)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    /// Consume the record for a refund and return the principal to pay back.
    /// The record is zeroed, not closed, a second refund finds it consumed.
    pub fn take_refund(&mut self) -> Result<u64> {
        check_condition!(
            !self.refunded && self.amount_committed > 0,
            AlreadyRefunded
        );

        let refund_amount = self.amount_committed;

        self.units_ordered = 0;
        self.amount_committed = 0;
        self.refunded = true;

        Ok(refund_amount)
    }
}
