use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::types::{Bitmap, TextPaint};

/// 表盘绘制目标
pub trait FaceCanvas {
    type Error: core::fmt::Debug;

    /// 整屏填充
    fn draw_color(&mut self, color: Rgb888) -> Result<(), Self::Error>;

    fn draw_rect(&mut self, area: Rectangle, color: Rgb888) -> Result<(), Self::Error>;

    /// `top_left` 为位图左上角
    fn draw_bitmap(&mut self, bitmap: &Bitmap, top_left: Point) -> Result<(), Self::Error>;

    /// `origin` 为文字基线左端
    fn draw_text(&mut self, text: &str, origin: Point, paint: &TextPaint)
        -> Result<(), Self::Error>;
}
