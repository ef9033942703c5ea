use anchor_lang::prelude::*;

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_DESCRIPTION_MAX_LEN, MARKET_QUESTION_MAX_LEN, MARKET_STATE_SEED,
    PLATFORM_CONFIG_SEED,
};
use crate::errors::MarketError;
use crate::events::MarketApproved;
use crate::state::{MarketConfig, MarketState, PlatformConfig};

#[derive(Accounts)]
pub struct ApproveMarket<'info> {
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

/// Proposed -> Approved. The config freezes here: `update_market_config` and
/// `dismiss_market` both refuse approved markets.
pub fn process_approve_market(ctx: Context<ApproveMarket>) -> Result<()> {
    let state = &mut ctx.accounts.market_state;
    let config = &ctx.accounts.market_config;

    require!(!state.is_approved, MarketError::MarketAlreadyApproved);
    require!(!state.is_resolved, MarketError::MarketAlreadyResolved);

    // Admin edits happened after proposal validation, so re-check the config
    // before freezing it.
    require!(
        config.question.as_bytes().len() <= MARKET_QUESTION_MAX_LEN,
        MarketError::QuestionTooLong
    );
    require!(
        config.description.as_bytes().len() <= MARKET_DESCRIPTION_MAX_LEN,
        MarketError::DescriptionTooLong
    );
    require!(
        config.start_time < config.end_time,
        MarketError::InvalidEndTime
    );
    require!(
        config.min_prediction_price > 0,
        MarketError::MinPredictionPriceZero
    );

    state.is_approved = true;

    emit!(MarketApproved {
        market_id: config.market_id,
    });

    Ok(())
}
