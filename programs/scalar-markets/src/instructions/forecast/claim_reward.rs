use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_STATE_SEED, MARKET_VAULT_SEED, PLATFORM_CONFIG_SEED, POSITION_SEED,
};
use crate::errors::MarketError;
use crate::events::RewardClaimed;
use crate::state::{MarketConfig, MarketState, PlatformConfig, Position};
use crate::utils::math::calculate_reward;

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [PLATFORM_CONFIG_SEED, platform_config.admin.key().as_ref()],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(
        seeds = [MARKET_CONFIG_SEED, market_config.market_id.to_le_bytes().as_ref(), platform_config.key().as_ref()],
        bump = market_config.bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
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

    // The user key in the seeds makes positions claimable only by their owner.
    #[account(
        mut,
        seeds = [POSITION_SEED, position.index.to_le_bytes().as_ref(), user.key().as_ref(), market_config.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, Position>,

    pub system_program: Program<'info, System>,
}

/// One-shot payout. The `claimed` flag is checked and set inside this single
/// instruction, so a duplicate claim can never double-pay.
pub fn process_claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
    let state = &ctx.accounts.market_state;
    let position = &mut ctx.accounts.position;

    require!(state.is_approved, MarketError::MarketNotApproved);
    require!(state.is_resolved, MarketError::MarketNotResolved);

    let now = Clock::get()?.unix_timestamp;
    require!(
        now >= ctx.accounts.market_config.end_time,
        MarketError::MarketNotEnded
    );

    let resolution = state.resolution.ok_or(MarketError::MarketNotResolved)?;
    let total_scores = state.total_scores.ok_or(MarketError::MarketNotResolved)?;

    let reward = calculate_reward(
        position.prediction,
        resolution,
        position.decay,
        state.total_pool,
        total_scores,
    )?;

    position.settle(reward)?;

    // A zero aggregate (or fully underflowed score) pays nothing; skip the
    // transfer rather than failing.
    if reward > 0 {
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
                    to: ctx.accounts.user.to_account_info(),
                },
                signer_seeds,
            ),
            reward,
        )?;
    }

    emit!(RewardClaimed {
        market_id: ctx.accounts.market_config.market_id,
        user: ctx.accounts.user.key(),
        index: ctx.accounts.position.index,
        reward,
    });

    Ok(())
}
