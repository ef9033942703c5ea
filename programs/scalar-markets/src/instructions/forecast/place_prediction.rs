use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_STATE_SEED, MARKET_VAULT_SEED, PLATFORM_CONFIG_SEED,
    PLATFORM_TREASURY_SEED, POSITION_SEED,
};
use crate::errors::MarketError;
use crate::events::PredictionPlaced;
use crate::state::{MarketConfig, MarketState, PlatformConfig, Position};
use crate::utils::math::{next_decay, split_stake};

#[derive(Accounts)]
pub struct PlacePrediction<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED, platform_config.admin.key().as_ref()],
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

    #[account(
        mut,
        seeds = [MARKET_VAULT_SEED, market_config.key().as_ref()],
        bump = market_config.vault_bump,
    )]
    pub market_vault: SystemAccount<'info>,

    // Seeded by the position counter: two submissions can never be assigned
    // the same index, the runtime serializes them on this account.
    #[account(
        init,
        payer = user,
        seeds = [POSITION_SEED, market_state.total_positions.to_le_bytes().as_ref(), user.key().as_ref(), market_config.key().as_ref()],
        space = Position::LEN,
        bump,
    )]
    pub position: Account<'info, Position>,

    pub system_program: Program<'info, System>,
}

pub fn process_place_prediction(
    ctx: Context<PlacePrediction>,
    prediction: i64,
    stake_amount: u64,
) -> Result<()> {
    let config = &ctx.accounts.market_config;
    let state = &mut ctx.accounts.market_state;

    let now = Clock::get()?.unix_timestamp;
    state.ensure_open(config.start_time, config.end_time, now)?;
    require!(
        stake_amount >= config.min_prediction_price,
        MarketError::StakeTooLow
    );

    let fees = split_stake(
        stake_amount,
        ctx.accounts.platform_config.platform_fee_bps,
        ctx.accounts.platform_config.creator_fee_bps,
    )?;

    // Platform fee straight to the treasury.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.platform_treasury.to_account_info(),
            },
        ),
        fees.platform_fee,
    )?;

    // Net stake plus the creator fee are escrowed in the market vault until
    // claim / revenue withdrawal.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.market_vault.to_account_info(),
            },
        ),
        fees.net_stake + fees.creator_fee,
    )?;

    let index = state.total_positions;
    ctx.accounts.position.set_inner(Position {
        index,
        user: ctx.accounts.user.key(),
        market: config.key(),
        prediction,
        stake: fees.net_stake,
        decay: state.decay,
        timestamp: now,
        claimed: false,
        reward: None,
        bump: ctx.bumps.position,
    });

    state.total_pool = state
        .total_pool
        .checked_add(fees.net_stake)
        .ok_or(MarketError::MathOverflow)?;
    state.total_positions = state
        .total_positions
        .checked_add(1)
        .ok_or(MarketError::MathOverflow)?;
    state.creator_fee_revenue = state
        .creator_fee_revenue
        .checked_add(fees.creator_fee)
        .ok_or(MarketError::MathOverflow)?;

    // Narrow the bandwidth for whoever predicts next.
    state.decay = next_decay(state.decay, config.start_time, config.end_time, now)?;

    emit!(PredictionPlaced {
        market_id: config.market_id,
        user: ctx.accounts.user.key(),
        index,
        prediction,
        stake: fees.net_stake,
        decay: ctx.accounts.position.decay,
        new_total_pool: state.total_pool,
        timestamp: now,
    });

    Ok(())
}
