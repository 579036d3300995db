//! 渲染模块
//! 负责背景图加载、帧缓冲区以及表盘画布

#[cfg(feature = "png")]
mod assets;
mod canvas;
mod framebuffer;

#[cfg(feature = "png")]
pub use assets::{AssetSource, DirAssetSource, PngAssetLoader, decode_scaled, load_asset_table};
pub use canvas::{EgCanvas, font_for_size};
pub use framebuffer::Framebuffer;
