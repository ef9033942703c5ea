use anchor_lang::prelude::*;

/// Global fee configuration, one PDA per admin. The treasury is a data-less
/// system account PDA that accumulates platform fees and proposal fees.
#[account]
pub struct PlatformConfig {
    pub admin: Pubkey,            // 32
    pub creator_fee_bps: u16,     // 2
    pub platform_fee_bps: u16,    // 2
    pub market_proposal_fee: u64, // 8
    pub bump: u8,                 // 1
    pub treasury_bump: u8,        // 1
}

impl PlatformConfig {
    pub const LEN: usize = 8 + 32 + 2 + 2 + 8 + 1 + 1;
}
