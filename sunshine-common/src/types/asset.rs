use alloc::vec;
use alloc::vec::Vec;

use crate::types::error::AssetError;
use crate::types::weather::BackgroundArt;

/// RGBA 位图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Bitmap {
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self, AssetError> {
        if pixels.len() != width as usize * height as usize {
            return Err(AssetError::SizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// 启动时一次性解码并缩放的全部背景图，之后只读
#[derive(Debug, Clone)]
pub struct AssetTable {
    arts: [Bitmap; BackgroundArt::COUNT],
}

impl AssetTable {
    /// `arts` 按 [`BackgroundArt::index`] 排列
    pub fn new(arts: [Bitmap; BackgroundArt::COUNT]) -> Self {
        Self { arts }
    }

    pub fn get(&self, art: BackgroundArt) -> &Bitmap {
        &self.arts[art.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (BackgroundArt, &Bitmap)> {
        BackgroundArt::ALL.into_iter().zip(self.arts.iter())
    }
}
