use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{
    MARKET_CONFIG_SEED, MARKET_DESCRIPTION_MAX_LEN, MARKET_QUESTION_MAX_LEN, MARKET_STATE_SEED,
    MARKET_VAULT_SEED, PLATFORM_CONFIG_SEED, PLATFORM_TREASURY_SEED,
};
use crate::errors::MarketError;
use crate::events::MarketProposed;
use crate::state::{MarketConfig, MarketState, PlatformConfig};
use crate::utils::math::initial_decay;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct ProposeMarket<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

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
        init,
        payer = creator,
        seeds = [MARKET_CONFIG_SEED, market_id.to_le_bytes().as_ref(), platform_config.key().as_ref()],
        space = MarketConfig::LEN,
        bump,
    )]
    pub market_config: Account<'info, MarketConfig>,

    #[account(
        init,
        payer = creator,
        seeds = [MARKET_STATE_SEED, market_config.key().as_ref(), platform_config.key().as_ref()],
        space = MarketState::LEN,
        bump,
    )]
    pub market_state: Account<'info, MarketState>,

    /// Data-less PDA escrowing net stakes and creator fees for this market.
    #[account(
        seeds = [MARKET_VAULT_SEED, market_config.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a market in the proposed state. Anyone may propose; the fixed
/// proposal fee goes to the platform treasury up front and predictions stay
/// locked out until the admin approves.
pub fn process_propose_market(
    ctx: Context<ProposeMarket>,
    market_id: u64,
    start_time: i64,
    end_time: i64,
    min_prediction_price: u64,
    question: String,
    description: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require!(start_time >= now, MarketError::StartTimeInPast);
    require!(end_time > start_time, MarketError::InvalidEndTime);
    require!(
        question.as_bytes().len() <= MARKET_QUESTION_MAX_LEN,
        MarketError::QuestionTooLong
    );
    require!(
        description.as_bytes().len() <= MARKET_DESCRIPTION_MAX_LEN,
        MarketError::DescriptionTooLong
    );
    require!(
        min_prediction_price > 0,
        MarketError::MinPredictionPriceZero
    );

    // Non-positive bandwidth would make the scoring kernel degenerate, so it
    // is rejected here rather than at claim time.
    let decay = initial_decay(start_time, end_time)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.platform_treasury.to_account_info(),
            },
        ),
        ctx.accounts.platform_config.market_proposal_fee,
    )?;

    ctx.accounts.market_config.set_inner(MarketConfig {
        market_id,
        creator: ctx.accounts.creator.key(),
        market_state: ctx.accounts.market_state.key(),
        start_time,
        end_time,
        min_prediction_price,
        question: question.clone(),
        description,
        bump: ctx.bumps.market_config,
        vault_bump: ctx.bumps.market_vault,
    });

    ctx.accounts.market_state.set_inner(MarketState {
        market_config: ctx.accounts.market_config.key(),
        is_approved: false,
        is_resolved: false,
        resolution: None,
        total_pool: 0,
        total_positions: 0,
        total_scores: None,
        creator_fee_revenue: 0,
        decay,
        bump: ctx.bumps.market_state,
    });

    emit!(MarketProposed {
        market_id,
        creator: ctx.accounts.creator.key(),
        question,
        start_time,
        end_time,
        min_prediction_price,
        decay,
    });

    Ok(())
}
