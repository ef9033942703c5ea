use anchor_lang::prelude::*;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub creator_fee_bps: u16,
    pub platform_fee_bps: u16,
    pub market_proposal_fee: u64,
}

#[event]
pub struct PlatformConfigUpdated {
    pub admin: Pubkey,
    pub creator_fee_bps: u16,
    pub platform_fee_bps: u16,
    pub market_proposal_fee: u64,
}

#[event]
pub struct MarketProposed {
    pub market_id: u64,
    pub creator: Pubkey,
    pub question: String,
    pub start_time: i64,
    pub end_time: i64,
    pub min_prediction_price: u64,
    pub decay: u64,
}

#[event]
pub struct MarketApproved {
    pub market_id: u64,
}

#[event]
pub struct MarketDismissed {
    pub market_id: u64,
    pub creator: Pubkey,
    pub refund: u64,
}

#[event]
pub struct PredictionPlaced {
    pub market_id: u64,
    pub user: Pubkey,
    pub index: u64,
    pub prediction: i64,
    pub stake: u64,
    pub decay: u64,
    pub new_total_pool: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketResolved {
    pub market_id: u64,
    pub resolution: i64,
    pub total_scores: u128,
    pub total_pool: u64,
    pub total_positions: u64,
}

#[event]
pub struct RewardClaimed {
    pub market_id: u64,
    pub user: Pubkey,
    pub index: u64,
    pub reward: u64,
}

#[event]
pub struct CreatorRevenueWithdrawn {
    pub market_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PlatformFeesWithdrawn {
    pub admin: Pubkey,
    pub amount: u64,
}
