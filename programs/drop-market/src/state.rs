use anchor_lang::prelude::*;
use shared::constants::{MAX_NAME_LENGTH, MAX_URI_LENGTH};

/// Marketplace config holds the fee rates applied to every campaign running
/// under it and pairs with the treasury that collects those fees.
/// One config exists per (authority, fee token mint) pair.
///
/// PDA Seeds ["config", authority pubkey, token mint pubkey]
#[account]
#[derive(Default, InitSpace)]
pub struct MarketplaceConfig {
    pub bump: u8,

    /// Bump of the treasury PDA that owns the treasury token account.
    pub treasury_bump: u8,

    /// The principal that created the marketplace.
    pub authority: Pubkey,

    /// The only mint campaigns under this marketplace settle in.
    pub token_mint: Pubkey,

    /// Fee taken out of every preorder, in basis points.
    pub commit_fees_bps: u16,

    /// Fee taken out of the vault balance at withdrawal, in basis points.
    pub withdraw_fees_bps: u16,
}

impl MarketplaceConfig {
    pub const SIZE: usize = 8 + MarketplaceConfig::INIT_SPACE;
}

/// A drop campaign escrows supporter preorders toward a fixed unit goal
/// within a time window. The account is never closed, after settlement it
/// stays as the audit record of the raise.
///
/// PDA Seeds ["drop_campaign", config pubkey, creator pubkey, name]
#[account]
#[derive(Default, InitSpace)]
pub struct DropCampaign {
    pub bump: u8,

    /// The principal that may withdraw the proceeds of a successful campaign.
    pub creator: Pubkey,

    /// Discriminates campaigns of one creator under one marketplace.
    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    /// Points at the off-chain drop metadata, stored verbatim.
    #[max_len(MAX_URI_LENGTH)]
    pub uri: String,

    /// Units that must be pledged for the campaign to succeed.
    pub goal_orders: u32,

    /// Units pledged so far. Monotonic, may exceed the goal.
    pub pledged_orders: u32,

    /// Cumulative units one supporter may order on this campaign.
    pub allowed_units_per_supporter: u32,

    /// Price of one unit, in base units of the marketplace mint.
    pub price: u64,

    /// Distinct supporters that ordered at least once. Monotonic.
    pub supporter_count: u64,

    pub start_timestamp: i64,
    pub end_timestamp: i64,

    /// One way flag, set by the first settlement that resolves the outcome.
    pub is_finalized: bool,

    /// The resolved outcome, meaningful once `is_finalized` is set.
    pub is_successful: bool,

    /// Set when the creator has collected the proceeds.
    pub is_withdrawn: bool,
}

impl DropCampaign {
    pub const SIZE: usize = 8 + DropCampaign::INIT_SPACE;
}

/// Cumulative pledge record of one supporter on one campaign, created on the
/// supporter's first preorder. A refund zeroes the record and marks it
/// consumed instead of closing it.
///
/// PDA Seeds ["supporter", campaign pubkey, supporter pubkey]
#[account]
#[derive(Default, InitSpace)]
pub struct SupporterAccount {
    pub bump: u8,

    /// The supporter that signs the orders and receives the refund.
    pub authority: Pubkey,

    pub drop_campaign: Pubkey,

    /// Cumulative units ordered, bounded by the campaign's per supporter cap.
    pub units_ordered: u32,

    /// Net of commit fee principal this supporter holds in the campaign vault.
    pub amount_committed: u64,

    /// Set once the principal went back to the supporter.
    pub refunded: bool,
}

impl SupporterAccount {
    pub const SIZE: usize = 8 + SupporterAccount::INIT_SPACE;
}
