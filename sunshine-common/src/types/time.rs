use core::fmt::Write;

use jiff::Timestamp;
use jiff::civil::{DateTime, date};
use jiff::tz::TimeZone;

use crate::types::error::ServiceError;

pub type ClockText = heapless::String<16>;

/// 环境模式 `H:MM`，交互模式 `H:MM:SS`；小时不补零
pub fn clock_text(hour: i8, minute: i8, second: i8, ambient: bool) -> ClockText {
    let mut text = ClockText::new();
    let _ = if ambient {
        write!(text, "{}:{:02}", hour, minute)
    } else {
        write!(text, "{}:{:02}:{:02}", hour, minute, second)
    };
    text
}

/// 表盘时钟：当前时区加上最近一次对时得到的本地时间
#[derive(Debug, Clone)]
pub struct FaceClock {
    zone: TimeZone,
    now: DateTime,
}

impl FaceClock {
    pub fn new(zone: TimeZone) -> Self {
        Self {
            zone,
            now: date(1970, 1, 1).at(0, 0, 0, 0),
        }
    }

    /// 切换时区，需要再调用 `set_to_now` 刷新本地时间
    pub fn clear(&mut self, zone: TimeZone) {
        self.zone = zone;
    }

    pub fn set_to_now(&mut self, now_millis: i64) -> Result<(), ServiceError> {
        let timestamp = Timestamp::from_millisecond(now_millis)
            .map_err(|_| ServiceError::InvalidTimestamp(now_millis))?;
        self.now = self.zone.to_datetime(timestamp);
        Ok(())
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    pub fn now(&self) -> DateTime {
        self.now
    }

    pub fn text(&self, ambient: bool) -> ClockText {
        clock_text(
            self.now.hour(),
            self.now.minute(),
            self.now.second(),
            ambient,
        )
    }
}

impl Default for FaceClock {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}
