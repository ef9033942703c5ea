pub mod admin;
pub mod creator;
pub mod forecast;

pub use admin::*;
pub use creator::*;
pub use forecast::*;
