use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// 点击手势阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapType {
    /// 手指刚接触屏幕
    Touch,
    /// 手势被取消或转为其他手势
    TouchCancel,
    /// 完整的一次点击
    Tap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapCommand {
    pub tap_type: TapType,
    pub x: i32,
    pub y: i32,
    pub event_time: i64,
}

impl TapCommand {
    pub fn new(tap_type: TapType, x: i32, y: i32, event_time: i64) -> Self {
        Self {
            tap_type,
            x,
            y,
            event_time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowInsets {
    pub is_round: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceProperties {
    /// 环境模式下屏幕色深降低，此时关闭文字抗锯齿
    pub low_bit_ambient: bool,
}

/// 文字画笔
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPaint {
    pub color: Rgb888,
    pub size: u32,
    pub anti_alias: bool,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            color: Rgb888::WHITE,
            size: 40,
            anti_alias: true,
        }
    }
}

/// `0xRRGGBB` 转颜色
pub const fn rgb888(hex: u32) -> Rgb888 {
    Rgb888::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}
