use alloc::format;
use alloc::string::String;

use crate::events::data::{
    DataMap, WATCH_TIME, WEATHER_DESC, WEATHER_HIGH, WEATHER_ID, WEATHER_LOW,
};
use crate::types::error::PayloadError;

/// 晴天的天气代码，首次同步前使用
pub const CLEAR_SKY_CODE: i32 = 800;

/// 手机端推送的当前天气
///
/// 每次本地广播都会整体替换，不做字段级合并，也不按 `observed_at` 排序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSnapshot {
    pub high_temp: String,
    pub low_temp: String,
    pub description: String,
    pub condition_code: i32,
    pub observed_at: i64,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            high_temp: String::new(),
            low_temp: String::new(),
            description: String::new(),
            condition_code: CLEAR_SKY_CODE,
            observed_at: 0,
        }
    }
}

impl WeatherSnapshot {
    pub fn new(
        high_temp: &str,
        low_temp: &str,
        description: &str,
        condition_code: i32,
        observed_at: i64,
    ) -> Self {
        Self {
            high_temp: high_temp.into(),
            low_temp: low_temp.into(),
            description: description.into(),
            condition_code,
            observed_at,
        }
    }

    /// 读取全部五个天气字段，任一字段缺失或类型不符则整条失败
    ///
    /// 字符串原样保留，不限制长度。
    pub fn from_data_map(map: &DataMap) -> Result<Self, PayloadError> {
        let high = map.get_string(WEATHER_HIGH)?;
        let low = map.get_string(WEATHER_LOW)?;
        let desc = map.get_string(WEATHER_DESC)?;
        let code = map.get_int(WEATHER_ID)?;
        let time = map.get_long(WATCH_TIME)?;

        Ok(Self::new(high, low, desc, code, time))
    }

    /// 温度行：最高温和最低温之间两个空格，不带单位
    pub fn temperature_line(&self) -> String {
        format!("{}  {}", self.high_temp, self.low_temp)
    }

    pub fn background_art(&self) -> Option<BackgroundArt> {
        BackgroundArt::for_condition(self.condition_code)
    }
}

/// 天气背景图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundArt {
    Clear,
    Clouds,
    Fog,
    LightClouds,
    LightRain,
    Rain,
    Snow,
    Storm,
}

impl BackgroundArt {
    pub const COUNT: usize = 8;

    pub const ALL: [BackgroundArt; Self::COUNT] = [
        BackgroundArt::Clear,
        BackgroundArt::Clouds,
        BackgroundArt::Fog,
        BackgroundArt::LightClouds,
        BackgroundArt::LightRain,
        BackgroundArt::Rain,
        BackgroundArt::Snow,
        BackgroundArt::Storm,
    ];

    /// 天气代码映射到背景图
    ///
    /// 区间均为闭区间，自上而下匹配。不在任何区间内的代码没有背景图，只绘制背景色。
    pub fn for_condition(code: i32) -> Option<Self> {
        match code {
            200..=232 => Some(BackgroundArt::Storm),
            300..=321 => Some(BackgroundArt::LightRain),
            500..=504 => Some(BackgroundArt::Rain),
            511 => Some(BackgroundArt::Snow),
            520..=531 => Some(BackgroundArt::Rain),
            600..=622 => Some(BackgroundArt::Snow),
            // 761 落在雾的区间内，只有 781 对应风暴
            701..=761 => Some(BackgroundArt::Fog),
            781 => Some(BackgroundArt::Storm),
            800 => Some(BackgroundArt::Clear),
            801 => Some(BackgroundArt::LightClouds),
            802..=804 => Some(BackgroundArt::Clouds),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BackgroundArt::Clear => "clear",
            BackgroundArt::Clouds => "clouds",
            BackgroundArt::Fog => "fog",
            BackgroundArt::LightClouds => "light-clouds",
            BackgroundArt::LightRain => "light-rain",
            BackgroundArt::Rain => "rain",
            BackgroundArt::Snow => "snow",
            BackgroundArt::Storm => "storm",
        }
    }

    /// 资源文件名
    pub fn file_name(self) -> &'static str {
        match self {
            BackgroundArt::Clear => "art_clear.png",
            BackgroundArt::Clouds => "art_clouds.png",
            BackgroundArt::Fog => "art_fog.png",
            BackgroundArt::LightClouds => "art_light_clouds.png",
            BackgroundArt::LightRain => "art_light_rain.png",
            BackgroundArt::Rain => "art_rain.png",
            BackgroundArt::Snow => "art_snow.png",
            BackgroundArt::Storm => "art_storm.png",
        }
    }
}
