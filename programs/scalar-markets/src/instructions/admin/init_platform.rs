use anchor_lang::prelude::*;

use crate::constants::{BASIS_POINT_SCALE, PLATFORM_CONFIG_SEED, PLATFORM_TREASURY_SEED};
use crate::errors::MarketError;
use crate::events::PlatformInitialized;
use crate::state::PlatformConfig;

#[derive(Accounts)]
pub struct InitPlatform<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        seeds = [PLATFORM_CONFIG_SEED, admin.key().as_ref()],
        space = PlatformConfig::LEN,
        bump,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Data-less PDA that accumulates platform and proposal fees.
    #[account(
        seeds = [PLATFORM_TREASURY_SEED, platform_config.key().as_ref()],
        bump,
    )]
    pub platform_treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_platform(
    ctx: Context<InitPlatform>,
    creator_fee_bps: u16,
    platform_fee_bps: u16,
    market_proposal_fee: u64,
) -> Result<()> {
    require!(
        creator_fee_bps <= BASIS_POINT_SCALE,
        MarketError::InvalidCreatorFeeBps
    );
    require!(
        platform_fee_bps <= BASIS_POINT_SCALE,
        MarketError::InvalidPlatformFeeBps
    );
    require!(
        creator_fee_bps + platform_fee_bps <= BASIS_POINT_SCALE,
        MarketError::TotalFeeTooHigh
    );
    require!(market_proposal_fee > 0, MarketError::InvalidProposalFee);

    let platform = &mut ctx.accounts.platform_config;
    platform.admin = ctx.accounts.admin.key();
    platform.creator_fee_bps = creator_fee_bps;
    platform.platform_fee_bps = platform_fee_bps;
    platform.market_proposal_fee = market_proposal_fee;
    platform.bump = ctx.bumps.platform_config;
    platform.treasury_bump = ctx.bumps.platform_treasury;

    emit!(PlatformInitialized {
        admin: platform.admin,
        creator_fee_bps,
        platform_fee_bps,
        market_proposal_fee,
    });

    Ok(())
}
