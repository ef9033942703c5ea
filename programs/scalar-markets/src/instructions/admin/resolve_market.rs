use anchor_lang::prelude::*;

use crate::constants::{MARKET_CONFIG_SEED, MARKET_STATE_SEED, PLATFORM_CONFIG_SEED};
use crate::events::MarketResolved;
use crate::state::{MarketConfig, MarketState, PlatformConfig};

#[derive(Accounts)]
pub struct ResolveMarket<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED, admin.key().as_ref()],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        seeds = [MARKET_CONFIG_SEED, market_config.market_id.to_le_bytes().as_ref(), platform_config.key().as_ref()],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        mut,
        seeds = [MARKET_STATE_SEED, market_config.key().as_ref(), platform_config.key().as_ref()],
        bump = market_state.bump,
    )]
    pub market_state: Account<'info, MarketState>,
}

/// Approved -> Resolved (terminal, write-once). `total_scores` is the sum of
/// fixed-point position scores, computed off-chain by the resolver with
/// `utils::math::sum_scores` over every position of the market; the program
/// stores it as supplied.
pub fn process_resolve_market(
    ctx: Context<ResolveMarket>,
    resolution: i64,
    total_scores: u128,
) -> Result<()> {
    let state = &mut ctx.accounts.market_state;

    let now = Clock::get()?.unix_timestamp;
    state.resolve(
        resolution,
        total_scores,
        ctx.accounts.market_config.end_time,
        now,
    )?;

    emit!(MarketResolved {
        market_id: ctx.accounts.market_config.market_id,
        resolution,
        total_scores,
        total_pool: state.total_pool,
        total_positions: state.total_positions,
    });

    Ok(())
}
