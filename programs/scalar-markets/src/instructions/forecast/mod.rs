pub mod claim_reward;
pub mod place_prediction;

pub use claim_reward::*;
pub use place_prediction::*;
