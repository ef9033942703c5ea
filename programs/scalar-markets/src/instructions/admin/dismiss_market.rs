use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_STATE_SEED, MARKET_VAULT_SEED, PLATFORM_CONFIG_SEED,
    PLATFORM_TREASURY_SEED,
};
use crate::errors::MarketError;
use crate::events::MarketDismissed;
use crate::state::{MarketConfig, MarketState, PlatformConfig};

#[derive(Accounts)]
pub struct DismissMarket<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: receives the refund and the closed account rent; validated
    /// against `market_config.creator` below.
    #[account(mut)]
    pub creator: UncheckedAccount<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED, admin.key().as_ref()],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        mut,
        seeds = [PLATFORM_TREASURY_SEED, platform_config.key().as_ref()],
        bump = platform_config.treasury_bump,
    )]
    pub platform_treasury: SystemAccount<'info>,

    #[account(
        mut,
        close = creator,
        seeds = [MARKET_CONFIG_SEED, market_config.market_id.to_le_bytes().as_ref(), platform_config.key().as_ref()],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        mut,
        close = creator,
        seeds = [MARKET_STATE_SEED, market_config.key().as_ref(), platform_config.key().as_ref()],
        bump = market_state.bump,
    )]
    pub market_state: Account<'info, MarketState>,

    #[account(
        mut,
        seeds = [MARKET_VAULT_SEED, market_config.key().as_ref()],
        bump = market_config.vault_bump,
    )]
    pub market_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Proposed -> Dismissed (terminal). Only unapproved markets can be dismissed;
/// the creator gets half the proposal fee back plus whatever sits in the
/// market vault.
pub fn process_dismiss_market(ctx: Context<DismissMarket>) -> Result<()> {
    require!(
        !ctx.accounts.market_state.is_approved,
        MarketError::MarketAlreadyApproved
    );
    require!(
        !ctx.accounts.market_state.is_resolved,
        MarketError::MarketAlreadyResolved
    );
    require!(
        ctx.accounts.creator.key() == ctx.accounts.market_config.creator,
        MarketError::InvalidCreator
    );

    // Refund half the proposal fee out of the treasury.
    let refund = ctx.accounts.platform_config.market_proposal_fee / 2;
    let platform_config_key = ctx.accounts.platform_config.key();
    let seeds = &[
        PLATFORM_TREASURY_SEED,
        platform_config_key.as_ref(),
        &[ctx.accounts.platform_config.treasury_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.platform_treasury.to_account_info(),
                to: ctx.accounts.creator.to_account_info(),
            },
            signer_seeds,
        ),
        refund,
    )?;

    // Drain the escrow vault back to the creator. The config and state
    // accounts are closed to the creator by the `close` constraints.
    let escrowed = ctx.accounts.market_vault.lamports();
    if escrowed > 0 {
        ctx.accounts.creator.add_lamports(escrowed)?;
        ctx.accounts.market_vault.sub_lamports(escrowed)?;
    }

    emit!(MarketDismissed {
        market_id: ctx.accounts.market_config.market_id,
        creator: ctx.accounts.creator.key(),
        refund,
    });

    Ok(())
}
