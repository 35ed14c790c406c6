use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::check_condition;
use shared::constants::{
    DROP_CAMPAIGN_SEEDS, MARKETPLACE_CONFIG_SEEDS, SUPPORTER_SEEDS, TREASURY_SEEDS,
};
use shared::errors::ErrorCode;

use crate::events::PreorderPlaced;
use crate::state::{DropCampaign, MarketplaceConfig, SupporterAccount};

#[derive(Accounts)]
pub struct Preorder<'info> {
    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,

    #[account(mut)]
    pub supporter: Signer<'info>,

    #[account(
        seeds = [
            MARKETPLACE_CONFIG_SEEDS,
            marketplace_config.authority.as_ref(),
            marketplace_config.token_mint.as_ref(),
        ],
        bump = marketplace_config.bump
    )]
    pub marketplace_config: Account<'info, MarketplaceConfig>,

    #[account(
        mut,
        seeds = [
            DROP_CAMPAIGN_SEEDS,
            marketplace_config.key().as_ref(),
            drop_campaign.creator.as_ref(),
            drop_campaign.name.as_bytes(),
        ],
        bump = drop_campaign.bump
    )]
    pub drop_campaign: Account<'info, DropCampaign>,

    #[account(
        init_if_needed,
        payer = supporter,
        space = SupporterAccount::SIZE,
        seeds = [
            SUPPORTER_SEEDS,
            drop_campaign.key().as_ref(),
            supporter.key().as_ref(),
        ],
        bump
    )]
    pub supporter_account: Account<'info, SupporterAccount>,

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = supporter,
    )]
    pub supporter_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        seeds = [TREASURY_SEEDS, marketplace_config.key().as_ref()],
        bump = marketplace_config.treasury_bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = drop_campaign,
    )]
    pub campaign_vault: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl Preorder<'_> {
    pub fn validate(&self, current_time: i64) -> Result<()> {
        check_condition!(
            self.token_mint.key() == self.marketplace_config.token_mint,
            InvalidTokenMint
        );

        self.drop_campaign.validate_active(current_time)?;

        Ok(())
    }
}

pub fn handler(ctx: Context<Preorder>, units_ordered: u32) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    ctx.accounts.validate(current_time)?;

    let drop_campaign_key = ctx.accounts.drop_campaign.key();

    let is_first_order = ctx.accounts.supporter_account.process_init_if_needed(
        ctx.bumps.supporter_account,
        &ctx.accounts.supporter.key(),
        &drop_campaign_key,
    )?;

    let gross_amount = ctx
        .accounts
        .drop_campaign
        .price
        .checked_mul(units_ordered as u64)
        .ok_or(ErrorCode::MathOverflow)?;

    let fee_split = ctx.accounts.marketplace_config.split_commit_amount(gross_amount)?;

    ctx.accounts.supporter_account.record_order(
        units_ordered,
        fee_split.net_amount,
        ctx.accounts.drop_campaign.allowed_units_per_supporter,
    )?;

    ctx.accounts
        .drop_campaign
        .record_preorder(units_ordered, is_first_order)?;

    // The fee is collected upfront, only the net amount sits in escrow.
    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.supporter_token_account.to_account_info(),
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.supporter.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
            },
        ),
        fee_split.fee_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    token_interface::transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.supporter_token_account.to_account_info(),
                to: ctx.accounts.campaign_vault.to_account_info(),
                authority: ctx.accounts.supporter.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
            },
        ),
        fee_split.net_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(PreorderPlaced {
        drop_campaign: drop_campaign_key,
        supporter: ctx.accounts.supporter.key(),
        units_ordered,
        fee_amount: fee_split.fee_amount,
        amount_committed: fee_split.net_amount,
    });

    Ok(())
}
