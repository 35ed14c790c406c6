//! Campaign based preorder marketplace.
//!
//! A marketplace authority configures fee rates and a treasury, creators open
//! drop campaigns under it, and supporters escrow preorders toward each
//! campaign's unit goal. Outcomes resolve lazily on the settlement calls:
//! `withdraw` pays the creator of a successful campaign its net proceeds,
//! `claim_refund` gives a supporter of a failed campaign their principal back.
//!
//! Every order and settlement both reads and writes the campaign account, so
//! the runtime's write lock on that account serializes the whole check then
//! act sequence of one campaign against concurrent calls.
use anchor_lang::prelude::*;

use instructions::*;

pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("J6FKHukrVX5xZ5CxU5ULVFx4tZ3MUkFHNkDwuesgForK");

#[program]
pub mod drop_market {

    use super::*;

    /*
    Marketplace functions
    */
    pub fn initialize_marketplace(
        ctx: Context<InitMarketplace>,
        commit_fees_bps: u16,
        withdraw_fees_bps: u16,
    ) -> Result<()> {
        init_marketplace::handler(ctx, commit_fees_bps, withdraw_fees_bps)
    }

    /*
    Campaign functions
    */
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_campaign(
        ctx: Context<InitCampaign>,
        name: String,
        goal_orders: u32,
        price: u64,
        start_timestamp: i64,
        days_until_end: i64,
        uri: String,
        allowed_units_per_supporter: u8,
    ) -> Result<()> {
        init_campaign::handler(
            ctx,
            name,
            goal_orders,
            price,
            start_timestamp,
            days_until_end,
            uri,
            allowed_units_per_supporter,
        )
    }

    /*
    Supporter functions
    */
    pub fn preorder(ctx: Context<Preorder>, units_ordered: u32) -> Result<()> {
        preorder::handler(ctx, units_ordered)
    }

    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
        claim_refund::handler(ctx)
    }

    /*
    Creator functions
    */
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        withdraw::handler(ctx)
    }
}
