pub mod asset;
pub mod async_types;
pub mod config;
pub mod display;
pub mod error;
pub mod time;
pub mod weather;

pub use asset::*;
pub use async_types::*;
pub use config::*;
pub use display::*;
pub use error::*;
pub use time::*;
pub use weather::*;
