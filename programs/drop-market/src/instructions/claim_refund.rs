use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::check_condition;
use shared::constants::{DROP_CAMPAIGN_SEEDS, MARKETPLACE_CONFIG_SEEDS, SUPPORTER_SEEDS};
use shared::errors::ErrorCode;

use crate::events::RefundClaimed;
use crate::state::{DropCampaign, MarketplaceConfig, SupporterAccount};

#[derive(Accounts)]
pub struct ClaimRefund<'info> {
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
        mut,
        seeds = [
            SUPPORTER_SEEDS,
            drop_campaign.key().as_ref(),
            supporter.key().as_ref(),
        ],
        bump = supporter_account.bump
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
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = drop_campaign,
    )]
    pub campaign_vault: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl ClaimRefund<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(
            self.token_mint.key() == self.marketplace_config.token_mint,
            InvalidTokenMint
        );

        check_condition!(
            self.supporter_account.authority == self.supporter.key(),
            Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<ClaimRefund>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    ctx.accounts.validate()?;

    ctx.accounts.drop_campaign.finalize_refund(current_time)?;

    let refund_amount = ctx.accounts.supporter_account.take_refund()?;

    check_condition!(
        ctx.accounts.campaign_vault.amount >= refund_amount,
        InsufficientBalance
    );

    let marketplace_config_key = ctx.accounts.marketplace_config.key();
    let creator_key = ctx.accounts.drop_campaign.creator;

    let campaign_seeds = &[
        DROP_CAMPAIGN_SEEDS,
        marketplace_config_key.as_ref(),
        creator_key.as_ref(),
        ctx.accounts.drop_campaign.name.as_bytes(),
        &[ctx.accounts.drop_campaign.bump],
    ];
    let signer_seeds = &[&campaign_seeds[..]];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.campaign_vault.to_account_info(),
                to: ctx.accounts.supporter_token_account.to_account_info(),
                authority: ctx.accounts.drop_campaign.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        refund_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(RefundClaimed {
        drop_campaign: ctx.accounts.drop_campaign.key(),
        supporter: ctx.accounts.supporter.key(),
        amount: refund_amount,
    });

    Ok(())
}
