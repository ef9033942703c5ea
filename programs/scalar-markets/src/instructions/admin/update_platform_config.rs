use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINT_SCALE, PLATFORM_CONFIG_SEED};
use crate::errors::MarketError;
use crate::events::PlatformConfigUpdated;
use crate::state::PlatformConfig;

#[derive(Accounts)]
pub struct UpdatePlatformConfig<'info> {
    pub admin: Signer<'info>,

    // Seeds bind the config to the signing admin, so no separate
    // authorization check is needed here.
    #[account(
        mut,
        seeds = [PLATFORM_CONFIG_SEED, admin.key().as_ref()],
        bump = platform_config.bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,
}

/// Rate changes apply to future submissions only; existing positions keep the
/// net stake recorded at placement time.
pub fn process_update_platform_config(
    ctx: Context<UpdatePlatformConfig>,
    creator_fee_bps: Option<u16>,
    platform_fee_bps: Option<u16>,
    market_proposal_fee: Option<u64>,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform_config;

    if let Some(bps) = creator_fee_bps {
        require!(bps <= BASIS_POINT_SCALE, MarketError::InvalidCreatorFeeBps);
    }
    if let Some(bps) = platform_fee_bps {
        require!(bps <= BASIS_POINT_SCALE, MarketError::InvalidPlatformFeeBps);
    }
    if let Some(fee) = market_proposal_fee {
        require!(fee > 0, MarketError::InvalidProposalFee);
    }

    let new_creator = creator_fee_bps.unwrap_or(platform.creator_fee_bps);
    let new_platform = platform_fee_bps.unwrap_or(platform.platform_fee_bps);
    require!(
        new_creator + new_platform <= BASIS_POINT_SCALE,
        MarketError::TotalFeeTooHigh
    );

    platform.creator_fee_bps = new_creator;
    platform.platform_fee_bps = new_platform;
    if let Some(fee) = market_proposal_fee {
        platform.market_proposal_fee = fee;
    }

    emit!(PlatformConfigUpdated {
        admin: platform.admin,
        creator_fee_bps: platform.creator_fee_bps,
        platform_fee_bps: platform.platform_fee_bps,
        market_proposal_fee: platform.market_proposal_fee,
    });

    Ok(())
}
