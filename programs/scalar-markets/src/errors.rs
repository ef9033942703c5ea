use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Creator fee must be <= 10,000 bps")]
    InvalidCreatorFeeBps,
    #[msg("Platform fee must be <= 10,000 bps")]
    InvalidPlatformFeeBps,
    #[msg("Combined fees must not exceed 10,000 bps")]
    TotalFeeTooHigh,
    #[msg("Market proposal fee must be greater than zero")]
    InvalidProposalFee,
    #[msg("Start time must be in the future")]
    StartTimeInPast,
    #[msg("End time must be after the start time")]
    InvalidEndTime,
    #[msg("Question too long (max 256 bytes)")]
    QuestionTooLong,
    #[msg("Description too long (max 1024 bytes)")]
    DescriptionTooLong,
    #[msg("Minimum prediction price must be greater than zero")]
    MinPredictionPriceZero,
    #[msg("Stake is below the market minimum")]
    StakeTooLow,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Account is not the market creator")]
    InvalidCreator,
    #[msg("Market has not been approved")]
    MarketNotApproved,
    #[msg("Market has already been approved")]
    MarketAlreadyApproved,
    #[msg("Market has already been resolved")]
    MarketAlreadyResolved,
    #[msg("Market has not been resolved")]
    MarketNotResolved,
    #[msg("Market has not started")]
    MarketNotStarted,
    #[msg("Market has ended")]
    MarketEnded,
    #[msg("Market has not ended yet")]
    MarketNotEnded,
    #[msg("Reward already claimed")]
    RewardAlreadyClaimed,
    #[msg("Decay must be greater than zero")]
    InvalidDecay,
    #[msg("Creator revenue already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
