pub mod assets;
pub mod canvas;
pub mod face;
pub mod platform;

pub use assets::*;
pub use canvas::*;
pub use face::*;
pub use platform::*;
