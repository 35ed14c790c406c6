use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use shared::constants::{MARKETPLACE_CONFIG_SEEDS, TREASURY_SEEDS};

use crate::events::MarketplaceInitialized;
use crate::state::MarketplaceConfig;

#[derive(Accounts)]
pub struct InitMarketplace<'info> {
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,

    #[account(mut)]
    pub authority: Signer<'info>,

    /// The mint every campaign under this marketplace settles in.
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = MarketplaceConfig::SIZE,
        seeds = [
            MARKETPLACE_CONFIG_SEEDS,
            authority.key().as_ref(),
            token_mint.key().as_ref(),
        ],
        bump
    )]
    pub marketplace_config: Account<'info, MarketplaceConfig>,

    /// Data-less PDA that owns the treasury token account.
    #[account(
        mut,
        seeds = [TREASURY_SEEDS, marketplace_config.key().as_ref()],
        bump
    )]
    pub treasury: SystemAccount<'info>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = token_mint,
        associated_token::authority = treasury,
    )]
    pub treasury_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl InitMarketplace<'_> {
    pub fn validate(&self, commit_fees_bps: u16, withdraw_fees_bps: u16) -> Result<()> {
        MarketplaceConfig::validate_fee_rates(commit_fees_bps, withdraw_fees_bps)
    }
}

pub fn handler(
    ctx: Context<InitMarketplace>,
    commit_fees_bps: u16,
    withdraw_fees_bps: u16,
) -> Result<()> {
    ctx.accounts.validate(commit_fees_bps, withdraw_fees_bps)?;

    let marketplace_config = &mut ctx.accounts.marketplace_config;

    marketplace_config.bump = ctx.bumps.marketplace_config;
    marketplace_config.treasury_bump = ctx.bumps.treasury;
    marketplace_config.authority = ctx.accounts.authority.key();
    marketplace_config.token_mint = ctx.accounts.token_mint.key();
    marketplace_config.commit_fees_bps = commit_fees_bps;
    marketplace_config.withdraw_fees_bps = withdraw_fees_bps;

    // Keep the treasury PDA rent exempt so it survives as the token account
    // authority.
    let rent_amount =
        Rent::get()?.minimum_balance(ctx.accounts.treasury.to_account_info().data_len());

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        rent_amount,
    )?;

    emit!(MarketplaceInitialized {
        marketplace_config: ctx.accounts.marketplace_config.key(),
        commit_fees_bps,
        withdraw_fees_bps,
    });

    Ok(())
}
