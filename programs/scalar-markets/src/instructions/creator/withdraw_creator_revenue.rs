use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_STATE_SEED, MARKET_VAULT_SEED, PLATFORM_CONFIG_SEED,
};
use crate::errors::MarketError;
use crate::events::CreatorRevenueWithdrawn;
use crate::state::{MarketConfig, MarketState, PlatformConfig};

#[derive(Accounts)]
pub struct WithdrawCreatorRevenue<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED, platform_config.admin.key().as_ref()],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        seeds = [MARKET_CONFIG_SEED, market_config.market_id.to_le_bytes().as_ref(), platform_config.key().as_ref()],
        bump = market_config.bump,
        constraint = market_config.creator == creator.key() @ MarketError::Unauthorized,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        mut,
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

    pub rent: Sysvar<'info, Rent>,

    pub system_program: Program<'info, System>,
}

/// Pays out the fees accrued from this market's predictions. Zeroing the
/// accrual inside the same instruction is the replay guard: a second call
/// fails with `AlreadyWithdrawn`.
pub fn process_withdraw_creator_revenue(ctx: Context<WithdrawCreatorRevenue>) -> Result<()> {
    let state = &mut ctx.accounts.market_state;

    require!(state.is_resolved, MarketError::MarketNotResolved);
    require!(state.creator_fee_revenue > 0, MarketError::AlreadyWithdrawn);

    let reserve = ctx
        .accounts
        .rent
        .minimum_balance(ctx.accounts.market_vault.data_len());
    let available = ctx
        .accounts
        .market_vault
        .lamports()
        .saturating_sub(reserve);

    let amount = state.creator_fee_revenue.min(available);
    require!(amount > 0, MarketError::NothingToWithdraw);

    let market_config_key = ctx.accounts.market_config.key();
    let seeds = &[
        MARKET_VAULT_SEED,
        market_config_key.as_ref(),
        &[ctx.accounts.market_config.vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.market_vault.to_account_info(),
                to: ctx.accounts.creator.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    state.creator_fee_revenue = 0;

    emit!(CreatorRevenueWithdrawn {
        market_id: ctx.accounts.market_config.market_id,
        creator: ctx.accounts.creator.key(),
        amount,
    });

    Ok(())
}
