use anchor_lang::prelude::*;

/// Event emitted when a marketplace is initialized.
///
/// # Arguments
/// * `marketplace_config` - The config account that was created.
/// * `commit_fees_bps` - The fee rate applied to each preorder, in basis points.
/// * `withdraw_fees_bps` - The fee rate applied at withdrawal, in basis points.
#[event]
pub struct MarketplaceInitialized {
    pub marketplace_config: Pubkey,
    pub commit_fees_bps: u16,
    pub withdraw_fees_bps: u16,
}

/// Event emitted when a campaign is launched.
#[event]
pub struct CampaignLaunched {
    pub drop_campaign: Pubkey,
    pub creator: Pubkey,
    pub goal_orders: u32,
    pub end_timestamp: i64,
}

/// Event emitted when a preorder is placed.
///
/// # Arguments
/// * `drop_campaign` - The campaign the order was placed on.
/// * `supporter` - The ordering supporter.
/// * `units_ordered` - The units added by this order.
/// * `fee_amount` - The commit fee paid to the treasury.
/// * `amount_committed` - The net principal escrowed in the campaign vault.
#[event]
pub struct PreorderPlaced {
    pub drop_campaign: Pubkey,
    pub supporter: Pubkey,
    pub units_ordered: u32,
    pub fee_amount: u64,
    pub amount_committed: u64,
}

/// Event emitted when the creator collects the proceeds of a successful
/// campaign.
///
/// # Arguments
/// * `drop_campaign` - The campaign that was settled.
/// * `gross_amount` - The vault balance that was released.
/// * `fee_amount` - The withdraw fee paid to the treasury.
/// * `net_amount` - The proceeds paid to the creator.
#[event]
pub struct ProceedsWithdrawn {
    pub drop_campaign: Pubkey,
    pub gross_amount: u64,
    pub fee_amount: u64,
    pub net_amount: u64,
}

/// Event emitted when a supporter reclaims their principal from a failed
/// campaign.
#[event]
pub struct RefundClaimed {
    pub drop_campaign: Pubkey,
    pub supporter: Pubkey,
    pub amount: u64,
}
