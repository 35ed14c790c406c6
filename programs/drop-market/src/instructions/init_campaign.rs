use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use shared::check_condition;
use shared::constants::{DROP_CAMPAIGN_SEEDS, MARKETPLACE_CONFIG_SEEDS};
use shared::errors::ErrorCode;

use crate::events::CampaignLaunched;
use crate::state::{DropCampaign, MarketplaceConfig};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitCampaign<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [
            MARKETPLACE_CONFIG_SEEDS,
            marketplace_config.authority.as_ref(),
            marketplace_config.token_mint.as_ref(),
        ],
        bump = marketplace_config.bump
    )]
    pub marketplace_config: Account<'info, MarketplaceConfig>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = DropCampaign::SIZE,
        seeds = [
            DROP_CAMPAIGN_SEEDS,
            marketplace_config.key().as_ref(),
            creator.key().as_ref(),
            name.as_bytes(),
        ],
        bump
    )]
    pub drop_campaign: Account<'info, DropCampaign>,

    /// Escrow for the net supporter principal, owned by the campaign PDA.
    #[account(
        init,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = drop_campaign,
    )]
    pub campaign_vault: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl InitCampaign<'_> {
    #[allow(clippy::too_many_arguments)]
    pub fn validate(
        &self,
        name: &str,
        uri: &str,
        goal_orders: u32,
        price: u64,
        allowed_units_per_supporter: u32,
        days_until_end: i64,
    ) -> Result<()> {
        check_condition!(
            self.token_mint.key() == self.marketplace_config.token_mint,
            InvalidTokenMint
        );

        DropCampaign::validate_campaign_params(
            name,
            uri,
            goal_orders,
            price,
            allowed_units_per_supporter,
            days_until_end,
        )?;

        Ok(())
    }
}

#[allow(clippy::too_many_arguments)]
pub fn handler(
    ctx: Context<InitCampaign>,
    name: String,
    goal_orders: u32,
    price: u64,
    start_timestamp: i64,
    days_until_end: i64,
    uri: String,
    allowed_units_per_supporter: u8,
) -> Result<()> {
    let allowed_units_per_supporter = allowed_units_per_supporter as u32;

    ctx.accounts.validate(
        &name,
        &uri,
        goal_orders,
        price,
        allowed_units_per_supporter,
        days_until_end,
    )?;

    let end_timestamp = DropCampaign::compute_end_timestamp(start_timestamp, days_until_end)?;

    let drop_campaign = &mut ctx.accounts.drop_campaign;

    drop_campaign.bump = ctx.bumps.drop_campaign;
    drop_campaign.creator = ctx.accounts.creator.key();
    drop_campaign.name = name;
    drop_campaign.uri = uri;
    drop_campaign.goal_orders = goal_orders;
    drop_campaign.price = price;
    drop_campaign.allowed_units_per_supporter = allowed_units_per_supporter;
    drop_campaign.start_timestamp = start_timestamp;
    drop_campaign.end_timestamp = end_timestamp;

    emit!(CampaignLaunched {
        drop_campaign: ctx.accounts.drop_campaign.key(),
        creator: ctx.accounts.creator.key(),
        goal_orders,
        end_timestamp,
    });

    Ok(())
}
