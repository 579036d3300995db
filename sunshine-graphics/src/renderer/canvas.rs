use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X13, FONT_9X18, FONT_10X20};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use sunshine_common::{Bitmap, FaceCanvas, TextPaint};

/// 透明度低于该值的像素不绘制
const ALPHA_THRESHOLD: u8 = 128;

/// 按字号选择最接近的点阵字体
///
/// 点阵字体没有抗锯齿，`TextPaint::anti_alias` 在这里不起作用。
pub fn font_for_size(size: u32) -> &'static MonoFont<'static> {
    match size {
        0..=13 => &FONT_6X13,
        14..=18 => &FONT_9X18,
        _ => &FONT_10X20,
    }
}

/// 字号超过字体高度时的放大倍数，以分数 `(分子, 分母)` 表示
pub fn text_scale(size: u32) -> (u32, u32) {
    let height = font_for_size(size).character_size.height;
    if size > height { (size, height) } else { (1, 1) }
}

/// 以基线为锚点按比例放大像素的绘制目标
struct ScaledTarget<'a, D> {
    target: &'a mut D,
    anchor: Point,
    num: i32,
    den: i32,
}

impl<D> ScaledTarget<'_, D> {
    fn span(&self, offset: i32) -> (i32, i32) {
        let start = (offset * self.num).div_euclid(self.den);
        let end = ((offset + 1) * self.num).div_euclid(self.den);
        (start, end)
    }
}

impl<D: DrawTarget<Color = Rgb888>> Dimensions for ScaledTarget<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        self.target.bounding_box()
    }
}

impl<D: DrawTarget<Color = Rgb888>> DrawTarget for ScaledTarget<'_, D> {
    type Color = Rgb888;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let offset = point - self.anchor;
            let (x0, x1) = self.span(offset.x);
            let (y0, y1) = self.span(offset.y);
            let area = Rectangle::with_corners(
                self.anchor + Point::new(x0, y0),
                self.anchor + Point::new(x1 - 1, y1 - 1),
            );
            self.target.fill_solid(&area, color)?;
        }
        Ok(())
    }
}

/// 基于 embedded-graphics 的表盘画布
pub struct EgCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> EgCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &D {
        &*self.target
    }
}

impl<'a, D> FaceCanvas for EgCanvas<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn draw_color(&mut self, color: Rgb888) -> Result<(), Self::Error> {
        self.target.clear(color)
    }

    fn draw_rect(&mut self, area: Rectangle, color: Rgb888) -> Result<(), Self::Error> {
        area.into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut *self.target)
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, top_left: Point) -> Result<(), Self::Error> {
        let width = bitmap.width() as usize;
        let pixels = bitmap
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, rgba)| rgba[3] >= ALPHA_THRESHOLD)
            .map(|(i, rgba)| {
                let offset = Point::new((i % width) as i32, (i / width) as i32);
                Pixel(top_left + offset, Rgb888::new(rgba[0], rgba[1], rgba[2]))
            });
        self.target.draw_iter(pixels)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        paint: &TextPaint,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font_for_size(paint.size), paint.color);
        let text = Text::with_baseline(text, origin, style, Baseline::Alphabetic);

        let (num, den) = text_scale(paint.size);
        if num == den {
            text.draw(&mut *self.target)?;
            return Ok(());
        }

        // 锚点取基线下一行，放大后字形仍落在基线之上
        let mut scaled = ScaledTarget {
            target: &mut *self.target,
            anchor: origin + Point::new(0, 1),
            num: num as i32,
            den: den as i32,
        };
        text.draw(&mut scaled)?;
        Ok(())
    }
}
