//! 背景图加载
//! 启动时一次性解码全部 PNG 并按比例缩放

use std::path::PathBuf;
use std::vec::Vec;

use image::ImageFormat;
use image::imageops::FilterType;
use sunshine_common::{AssetError, AssetLoader, AssetTable, BackgroundArt, Bitmap, debug};

/// 按文件名提供原始图片字节
pub trait AssetSource {
    fn read(&self, file_name: &str) -> Option<Vec<u8>>;
}

/// 从目录读取背景图
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn read(&self, file_name: &str) -> Option<Vec<u8>> {
        std::fs::read(self.root.join(file_name)).ok()
    }
}

/// 解码一张 PNG 并按 `scale` 做双线性缩放
pub fn decode_scaled(art: BackgroundArt, bytes: &[u8], scale: f32) -> Result<Bitmap, AssetError> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|_| AssetError::DecodeFailed(art))?;

    let width = (img.width() as f32 * scale) as u32;
    let height = (img.height() as f32 * scale) as u32;
    if width == 0 || height == 0 {
        return Err(AssetError::EmptyAfterScale(art));
    }

    let scaled = img.resize_exact(width, height, FilterType::Triangle).to_rgba8();
    let pixels = scaled.pixels().map(|p| p.0).collect();

    debug!("Loaded {} at {}x{}", art.file_name(), width, height);
    Bitmap::from_rgba(width, height, pixels)
}

/// 加载全部背景图，任一缺失或解码失败即返回错误
pub fn load_asset_table<S: AssetSource>(source: &S, scale: f32) -> Result<AssetTable, AssetError> {
    let mut arts: [Bitmap; BackgroundArt::COUNT] =
        core::array::from_fn(|_| Bitmap::solid(0, 0, [0; 4]));

    for art in BackgroundArt::ALL {
        let bytes = source
            .read(art.file_name())
            .ok_or(AssetError::NotFound(art))?;
        arts[art.index()] = decode_scaled(art, &bytes, scale)?;
    }

    Ok(AssetTable::new(arts))
}

/// PNG 背景图加载器
pub struct PngAssetLoader<S> {
    source: S,
}

impl<S: AssetSource> PngAssetLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: AssetSource> AssetLoader for PngAssetLoader<S> {
    fn load_table(&mut self, scale: f32) -> Result<AssetTable, AssetError> {
        load_asset_table(&self.source, scale)
    }
}
