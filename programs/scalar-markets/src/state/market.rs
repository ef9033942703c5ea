use anchor_lang::prelude::*;

use crate::constants::{MARKET_DESCRIPTION_MAX_LEN, MARKET_QUESTION_MAX_LEN};
use crate::errors::MarketError;

/// Immutable market parameters. Admin may edit fields until the market is
/// approved; after approval the account is only ever read.
#[account]
pub struct MarketConfig {
    pub market_id: u64,             // 8
    pub creator: Pubkey,            // 32
    pub market_state: Pubkey,       // 32
    pub start_time: i64,            // 8
    pub end_time: i64,              // 8
    pub min_prediction_price: u64,  // 8
    pub question: String,           // 4 + 256
    pub description: String,        // 4 + 1024
    pub bump: u8,                   // 1
    pub vault_bump: u8,             // 1
}

impl MarketConfig {
    pub const LEN: usize = 8
        + 8
        + 32
        + 32
        + 8 * 3
        + (4 + MARKET_QUESTION_MAX_LEN)
        + (4 + MARKET_DESCRIPTION_MAX_LEN)
        + 1
        + 1;
}

/// Mutable market bookkeeping: lifecycle flags, pool tallies and the decay
/// bandwidth the scoring kernel reads. `resolution` and `total_scores` are
/// written exactly once, by `resolve_market`.
#[account]
pub struct MarketState {
    pub market_config: Pubkey,     // 32
    pub is_approved: bool,         // 1
    pub is_resolved: bool,         // 1
    pub resolution: Option<i64>,   // 1 + 8
    pub total_pool: u64,           // 8
    pub total_positions: u64,      // 8
    pub total_scores: Option<u128>, // 1 + 16
    pub creator_fee_revenue: u64,  // 8
    pub decay: u64,                // 8
    pub bump: u8,                  // 1
}

impl MarketState {
    pub const LEN: usize = 8 + 32 + 1 + 1 + 9 + 8 + 8 + 17 + 8 + 8 + 1;

    /// Predictions are accepted only while approved, unresolved and inside
    /// the [start_time, end_time) window.
    pub fn ensure_open(&self, start_time: i64, end_time: i64, now: i64) -> Result<()> {
        require!(self.is_approved, MarketError::MarketNotApproved);
        require!(!self.is_resolved, MarketError::MarketAlreadyResolved);
        require!(now >= start_time, MarketError::MarketNotStarted);
        require!(now < end_time, MarketError::MarketEnded);
        Ok(())
    }

    /// Irreversible Approved -> Resolved transition; `resolution` and
    /// `total_scores` are written exactly once.
    pub fn resolve(
        &mut self,
        resolution: i64,
        total_scores: u128,
        end_time: i64,
        now: i64,
    ) -> Result<()> {
        require!(self.is_approved, MarketError::MarketNotApproved);
        require!(!self.is_resolved, MarketError::MarketAlreadyResolved);
        require!(now >= end_time, MarketError::MarketNotEnded);

        self.resolution = Some(resolution);
        self.total_scores = Some(total_scores);
        self.is_resolved = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approved_state() -> MarketState {
        MarketState {
            market_config: Pubkey::default(),
            is_approved: true,
            is_resolved: false,
            resolution: None,
            total_pool: 0,
            total_positions: 0,
            total_scores: None,
            creator_fee_revenue: 0,
            decay: 1,
            bump: 0,
        }
    }

    #[test]
    fn predictions_gated_on_approval_and_window() {
        let mut state = approved_state();
        assert!(state.ensure_open(100, 200, 150).is_ok());
        assert_eq!(
            state.ensure_open(100, 200, 50).unwrap_err(),
            MarketError::MarketNotStarted.into()
        );
        assert_eq!(
            state.ensure_open(100, 200, 200).unwrap_err(),
            MarketError::MarketEnded.into()
        );

        state.is_approved = false;
        assert_eq!(
            state.ensure_open(100, 200, 150).unwrap_err(),
            MarketError::MarketNotApproved.into()
        );
    }

    #[test]
    fn resolution_is_write_once() {
        let mut state = approved_state();
        assert_eq!(
            state.resolve(42, 0, 200, 150).unwrap_err(),
            MarketError::MarketNotEnded.into()
        );

        state.resolve(42, 1_000_000_000, 200, 250).unwrap();
        assert!(state.is_resolved);
        assert_eq!(state.resolution, Some(42));
        assert_eq!(state.total_scores, Some(1_000_000_000));

        let err = state.resolve(43, 7, 200, 300).unwrap_err();
        assert_eq!(err, MarketError::MarketAlreadyResolved.into());
        assert_eq!(state.resolution, Some(42));
    }

    #[test]
    fn resolved_market_refuses_predictions() {
        let mut state = approved_state();
        state.resolve(0, 0, 200, 250).unwrap();
        assert_eq!(
            state.ensure_open(100, 1_000, 300).unwrap_err(),
            MarketError::MarketAlreadyResolved.into()
        );
    }
}
