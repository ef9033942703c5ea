use anchor_lang::prelude::*;

use crate::errors::MarketError;

/// One prediction record. `index` doubles as a PDA seed, so two submissions
/// can never share an index, and `decay` is the market bandwidth snapshotted
/// at placement time. Mutated exactly once, by `claim_reward`.
#[account]
pub struct Position {
    pub index: u64,           // 8
    pub user: Pubkey,         // 32
    pub market: Pubkey,       // 32
    pub prediction: i64,      // 8
    pub stake: u64,           // 8
    pub decay: u64,           // 8
    pub timestamp: i64,       // 8
    pub claimed: bool,        // 1
    pub reward: Option<u64>,  // 1 + 8
    pub bump: u8,             // 1
}

impl Position {
    pub const LEN: usize = 8 + 8 + 32 + 32 + 8 * 4 + 1 + 9 + 1;

    /// Atomic check-and-set of the claim flag. Called before the payout
    /// transfer, so a duplicate claim fails without moving funds.
    pub fn settle(&mut self, reward: u64) -> Result<()> {
        require!(!self.claimed, MarketError::RewardAlreadyClaimed);
        self.reward = Some(reward);
        self.claimed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_is_one_shot() {
        let mut position = Position {
            index: 0,
            user: Pubkey::default(),
            market: Pubkey::default(),
            prediction: 100,
            stake: 1_000,
            decay: 1,
            timestamp: 0,
            claimed: false,
            reward: None,
            bump: 0,
        };

        position.settle(750).unwrap();
        assert!(position.claimed);
        assert_eq!(position.reward, Some(750));

        let err = position.settle(750).unwrap_err();
        assert_eq!(err, MarketError::RewardAlreadyClaimed.into());
        assert_eq!(position.reward, Some(750));
    }
}
