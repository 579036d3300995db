#![cfg_attr(not(test), no_std)]

pub mod managers;
pub mod services;

pub use managers::*;
pub use services::*;
