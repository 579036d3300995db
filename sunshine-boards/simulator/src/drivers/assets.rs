use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use sunshine_common::BackgroundArt;
use sunshine_graphics::{AssetSource, DirAssetSource};

/// 模拟器背景图来源
///
/// 设置了 `SUNSHINE_ASSETS` 时从目录读取，否则按天气生成纯色占位图。
pub enum SimAssetSource {
    Dir(DirAssetSource),
    Placeholder,
}

impl SimAssetSource {
    pub fn from_env() -> Self {
        match std::env::var_os("SUNSHINE_ASSETS") {
            Some(dir) => SimAssetSource::Dir(DirAssetSource::new(dir)),
            None => SimAssetSource::Placeholder,
        }
    }
}

impl AssetSource for SimAssetSource {
    fn read(&self, file_name: &str) -> Option<Vec<u8>> {
        match self {
            SimAssetSource::Dir(dir) => dir.read(file_name),
            SimAssetSource::Placeholder => {
                let art = BackgroundArt::ALL
                    .into_iter()
                    .find(|art| art.file_name() == file_name)?;
                placeholder_png(art)
            }
        }
    }
}

fn placeholder_png(art: BackgroundArt) -> Option<Vec<u8>> {
    let shade = 60 + art.index() as u8 * 24;
    let img = RgbaImage::from_pixel(400, 400, Rgba([shade, shade, 255 - shade, 255]));

    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut bytes, ImageFormat::Png)
        .ok()?;
    Some(bytes.into_inner())
}
