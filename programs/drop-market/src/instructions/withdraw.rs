use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};
use shared::check_condition;
use shared::constants::{DROP_CAMPAIGN_SEEDS, MARKETPLACE_CONFIG_SEEDS, TREASURY_SEEDS};
use shared::errors::ErrorCode;

use crate::events::ProceedsWithdrawn;
use crate::state::{DropCampaign, MarketplaceConfig};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    pub system_program: Program<'info, System>,
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

    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = creator,
        associated_token::mint = token_mint,
        associated_token::authority = creator,
    )]
    pub creator_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

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

impl Withdraw<'_> {
    pub fn validate(&self) -> Result<()> {
        check_condition!(
            self.token_mint.key() == self.marketplace_config.token_mint,
            InvalidTokenMint
        );

        check_condition!(
            self.drop_campaign.creator == self.creator.key(),
            Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<Withdraw>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    ctx.accounts.validate()?;

    ctx.accounts.drop_campaign.finalize_withdrawal(current_time)?;

    let gross_amount = ctx.accounts.campaign_vault.amount;

    let fee_split = ctx
        .accounts
        .marketplace_config
        .split_withdraw_amount(gross_amount)?;

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
                to: ctx.accounts.treasury_token_account.to_account_info(),
                authority: ctx.accounts.drop_campaign.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        fee_split.fee_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.campaign_vault.to_account_info(),
                to: ctx.accounts.creator_token_account.to_account_info(),
                authority: ctx.accounts.drop_campaign.to_account_info(),
                mint: ctx.accounts.token_mint.to_account_info(),
            },
            signer_seeds,
        ),
        fee_split.net_amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(ProceedsWithdrawn {
        drop_campaign: ctx.accounts.drop_campaign.key(),
        gross_amount,
        fee_amount: fee_split.fee_amount,
        net_amount: fee_split.net_amount,
    });

    Ok(())
}
