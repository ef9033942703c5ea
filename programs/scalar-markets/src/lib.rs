//! Settlement engine for a continuous-outcome prediction market.
//!
//! Participants stake on a numeric forecast; at resolution each position is
//! scored with a Gaussian kernel of its distance to the resolved value and
//! paid a pro-rata share of the net-of-fees pool. The program is pure
//! settlement bookkeeping: no price discovery, matching or liquidity.

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("5uyGUeCnJyDNxyC3XpqNSQu6miN1PJ6Xx3uasgFhfE4U");

#[program]
pub mod scalar_markets {
    use super::*;

    pub fn initialize_platform(
        ctx: Context<InitPlatform>,
        creator_fee_bps: u16,
        platform_fee_bps: u16,
        market_proposal_fee: u64,
    ) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(
            ctx,
            creator_fee_bps,
            platform_fee_bps,
            market_proposal_fee,
        )
    }

    pub fn update_platform_config(
        ctx: Context<UpdatePlatformConfig>,
        creator_fee_bps: Option<u16>,
        platform_fee_bps: Option<u16>,
        market_proposal_fee: Option<u64>,
    ) -> Result<()> {
        instructions::admin::update_platform_config::process_update_platform_config(
            ctx,
            creator_fee_bps,
            platform_fee_bps,
            market_proposal_fee,
        )
    }

    pub fn propose_market(
        ctx: Context<ProposeMarket>,
        market_id: u64,
        start_time: i64,
        end_time: i64,
        min_prediction_price: u64,
        question: String,
        description: String,
    ) -> Result<()> {
        instructions::creator::propose_market::process_propose_market(
            ctx,
            market_id,
            start_time,
            end_time,
            min_prediction_price,
            question,
            description,
        )
    }

    pub fn update_market_config(
        ctx: Context<UpdateMarketConfig>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        min_prediction_price: Option<u64>,
        question: Option<String>,
        description: Option<String>,
    ) -> Result<()> {
        instructions::admin::update_market_config::process_update_market_config(
            ctx,
            start_time,
            end_time,
            min_prediction_price,
            question,
            description,
        )
    }

    pub fn approve_market(ctx: Context<ApproveMarket>) -> Result<()> {
        instructions::admin::approve_market::process_approve_market(ctx)
    }

    pub fn dismiss_market(ctx: Context<DismissMarket>) -> Result<()> {
        instructions::admin::dismiss_market::process_dismiss_market(ctx)
    }

    pub fn place_prediction(
        ctx: Context<PlacePrediction>,
        prediction: i64,
        stake_amount: u64,
    ) -> Result<()> {
        instructions::forecast::place_prediction::process_place_prediction(
            ctx,
            prediction,
            stake_amount,
        )
    }

    pub fn resolve_market(
        ctx: Context<ResolveMarket>,
        resolution: i64,
        total_scores: u128,
    ) -> Result<()> {
        instructions::admin::resolve_market::process_resolve_market(ctx, resolution, total_scores)
    }

    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::forecast::claim_reward::process_claim_reward(ctx)
    }

    pub fn withdraw_creator_revenue(ctx: Context<WithdrawCreatorRevenue>) -> Result<()> {
        instructions::creator::withdraw_creator_revenue::process_withdraw_creator_revenue(ctx)
    }

    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
        instructions::admin::withdraw_platform_fees::process_withdraw_platform_fees(ctx)
    }
}
