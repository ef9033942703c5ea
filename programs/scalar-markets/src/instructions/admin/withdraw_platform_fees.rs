use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::constants::{PLATFORM_CONFIG_SEED, PLATFORM_TREASURY_SEED};
use crate::errors::MarketError;
use crate::events::PlatformFeesWithdrawn;
use crate::state::PlatformConfig;

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

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

    pub rent: Sysvar<'info, Rent>,

    pub system_program: Program<'info, System>,
}

/// Sweeps the treasury to the admin, independent of any market's state. The
/// rent-exempt reserve stays behind so the treasury account survives.
pub fn process_withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>) -> Result<()> {
    let reserve = ctx
        .accounts
        .rent
        .minimum_balance(ctx.accounts.platform_treasury.data_len());

    let amount = ctx
        .accounts
        .platform_treasury
        .lamports()
        .saturating_sub(reserve);

    require!(amount > 0, MarketError::NothingToWithdraw);

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
                to: ctx.accounts.admin.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(PlatformFeesWithdrawn {
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}
