use embedded_graphics::pixelcolor::Rgb888;
use serde::{Deserialize, Serialize};

use crate::types::display::rgb888;
use crate::types::error::{ServiceError, SystemResult};

/// 方形与圆形屏幕各自的文字位置与字号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryPreset {
    pub x_offset: i32,
    pub text_size: u32,
}

/// 表盘配置，默认值即编译期预设
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// 偶数次点击时的背景色
    pub background_color: u32,
    /// 奇数次点击时的背景色
    pub background_color_alt: u32,
    pub ambient_background_color: u32,
    pub text_color: u32,
    pub square: GeometryPreset,
    pub round: GeometryPreset,
    /// 时间文字基线
    pub y_offset: i32,
    /// 温度文字基线
    pub y_offset_temperature: i32,
    /// 背景图顶边
    pub y_offset_art: i32,
    pub art_x_shift: i32,
    pub temperature_x_shift: i32,
    pub art_scale: f32,
    pub update_rate_ms: u64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            background_color: 0x03A9F4,
            background_color_alt: 0x0288D1,
            ambient_background_color: 0x000000,
            text_color: 0xFFFFFF,
            square: GeometryPreset {
                x_offset: 15,
                text_size: 40,
            },
            round: GeometryPreset {
                x_offset: 25,
                text_size: 45,
            },
            y_offset: 80,
            y_offset_temperature: 130,
            y_offset_art: 150,
            art_x_shift: 60,
            temperature_x_shift: 40,
            art_scale: 0.25,
            update_rate_ms: 1000,
        }
    }
}

impl FaceConfig {
    pub fn from_json(bytes: &[u8]) -> SystemResult<Self> {
        let config: Self =
            serde_json::from_slice(bytes).map_err(|_| ServiceError::InvalidConfig)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SystemResult<()> {
        if self.update_rate_ms == 0 || !(self.art_scale > 0.0 && self.art_scale <= 1.0) {
            return Err(ServiceError::InvalidConfig.into());
        }
        Ok(())
    }

    pub fn geometry(&self, is_round: bool) -> GeometryPreset {
        if is_round { self.round } else { self.square }
    }

    /// 按点击次数的奇偶选择背景色
    pub fn background_for_taps(&self, tap_count: u32) -> Rgb888 {
        if tap_count % 2 == 0 {
            rgb888(self.background_color)
        } else {
            rgb888(self.background_color_alt)
        }
    }

    pub fn ambient_background(&self) -> Rgb888 {
        rgb888(self.ambient_background_color)
    }

    pub fn text(&self) -> Rgb888 {
        rgb888(self.text_color)
    }
}
