//! 渲染缓冲区模块
//! 提供表盘的 RGB 帧缓冲区管理

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;

/// 渲染缓冲区
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buffer: Vec<Rgb888>,
}

impl Framebuffer {
    /// 创建新的渲染缓冲区，默认黑色
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            buffer: vec![Rgb888::BLACK; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 像素个数
    pub fn pixel_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.buffer
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// 清屏
    pub fn fill(&mut self, color: Rgb888) {
        self.buffer.fill(color);
    }

    /// 按行展开为 RGB 字节
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.buffer
            .iter()
            .flat_map(|c| [c.r(), c.g(), c.b()])
            .collect()
    }

    /// 保存为 PNG，用于模拟器导出帧
    #[cfg(feature = "png")]
    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb888;
    type Error = Infallible;

    /// 超出缓冲区的像素直接裁掉
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            if x >= self.width || y >= self.height {
                continue;
            }
            self.buffer[y as usize * self.width as usize + x as usize] = color;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(320, 320)
    }
}
