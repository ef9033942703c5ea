pub mod approve_market;
pub mod dismiss_market;
pub mod init_platform;
pub mod resolve_market;
pub mod update_market_config;
pub mod update_platform_config;
pub mod withdraw_platform_fees;

pub use approve_market::*;
pub use dismiss_market::*;
pub use init_platform::*;
pub use resolve_market::*;
pub use update_market_config::*;
pub use update_platform_config::*;
pub use withdraw_platform_fees::*;
