pub mod propose_market;
pub mod withdraw_creator_revenue;

pub use propose_market::*;
pub use withdraw_creator_revenue::*;
