use anchor_lang::prelude::*;
use shared::check_condition;
use shared::constants::{MAX_NAME_LENGTH, MAX_URI_LENGTH, SECONDS_PER_DAY};
use shared::errors::ErrorCode;

use crate::state::DropCampaign;
use crate::utils::structs::CampaignStatus;

impl DropCampaign {
    /// Validate the creation parameters of a campaign. Fee rates live on the
    /// marketplace config, everything else is fixed here at creation.
    pub fn validate_campaign_params(
        name: &str,
        uri: &str,
        goal_orders: u32,
        price: u64,
        allowed_units_per_supporter: u32,
        days_until_end: i64,
    ) -> Result<()> {
        check_condition!(
            !name.is_empty() && name.len() <= MAX_NAME_LENGTH,
            InvalidName
        );

        check_condition!(uri.len() <= MAX_URI_LENGTH, InvalidUri);

        check_condition!(goal_orders > 0, InvalidGoal);

        check_condition!(price > 0, InvalidPrice);

        check_condition!(allowed_units_per_supporter > 0, InvalidAllowedUnits);

        check_condition!(days_until_end > 0, InvalidTimestamps);

        Ok(())
    }

    /// Compute the end of the ordering window from its start and duration in
    /// days.
    pub fn compute_end_timestamp(start_timestamp: i64, days_until_end: i64) -> Result<i64> {
        let window = days_until_end
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(ErrorCode::MathOverflow)?;

        start_timestamp
            .checked_add(window)
            .ok_or(ErrorCode::MathOverflow.into())
    }

    /// Resolve the status the campaign is in at `now`.
    ///
    /// A finalized campaign reports its stored outcome. Before finalization
    /// reaching the goal resolves successful at any time, an elapsed window
    /// short of the goal resolves failed, anything else is still open.
    pub fn resolve_status(&self, now: i64) -> CampaignStatus {
        if self.is_finalized {
            return if self.is_successful {
                CampaignStatus::Successful
            } else {
                CampaignStatus::Failed
            };
        }

        if self.pledged_orders >= self.goal_orders {
            CampaignStatus::Successful
        } else if now >= self.end_timestamp {
            CampaignStatus::Failed
        } else {
            CampaignStatus::Open
        }
    }

    /// Orders are only accepted inside the window and before any outcome was
    /// finalized.
    pub fn validate_active(&self, now: i64) -> Result<()> {
        check_condition!(!self.is_finalized, CampaignFinalized);

        check_condition!(
            now >= self.start_timestamp && now <= self.end_timestamp,
            CampaignNotActive
        );

        Ok(())
    }

    /// Apply a successful preorder to the campaign aggregates.
    pub fn record_preorder(&mut self, units_ordered: u32, is_first_order: bool) -> Result<()> {
        self.pledged_orders = self
            .pledged_orders
            .checked_add(units_ordered)
            .ok_or(ErrorCode::MathOverflow)?;

        if is_first_order {
            self.supporter_count = self
                .supporter_count
                .checked_add(1)
                .ok_or(ErrorCode::MathOverflow)?;
        }

        Ok(())
    }

    /// Resolve the campaign for a creator withdrawal and mark the proceeds
    /// collected. The withdrawal itself finalizes a campaign that reached its
    /// goal but was never settled before.
    pub fn finalize_withdrawal(&mut self, now: i64) -> Result<()> {
        check_condition!(
            self.resolve_status(now) == CampaignStatus::Successful,
            CampaignNotSuccessful
        );

        check_condition!(!self.is_withdrawn, AlreadyWithdrawn);

        self.is_finalized = true;
        self.is_successful = true;
        self.is_withdrawn = true;

        Ok(())
    }

    /// Resolve the campaign for a supporter refund. The first refund after
    /// the window elapsed short of the goal finalizes the failure outcome,
    /// later refunds observe the stored outcome.
    pub fn finalize_refund(&mut self, now: i64) -> Result<()> {
        match self.resolve_status(now) {
            CampaignStatus::Successful => Err(error!(ErrorCode::CampaignSuccessful)),
            CampaignStatus::Open => Err(error!(ErrorCode::TooEarlyToFinalize)),
            CampaignStatus::Failed => {
                self.is_finalized = true;

                Ok(())
            }
        }
    }
}
