#![cfg_attr(not(any(test, feature = "png")), no_std)]

extern crate alloc;

pub mod renderer;

pub use renderer::*;
