pub mod market;
pub mod platform;
pub mod position;

pub use market::*;
pub use platform::*;
pub use position::*;
