use jiff::tz::TimeZone;

use crate::types::display::{DeviceProperties, TapCommand, WindowInsets};

/// 宿主回调的消息形式，用于经通道投递给表盘任务
#[derive(Debug, Clone)]
pub enum HostEvent {
    VisibilityChanged(bool),
    AmbientModeChanged(bool),
    PropertiesChanged(DeviceProperties),
    ApplyWindowInsets(WindowInsets),
    TapCommand(TapCommand),
    TimeTick,
    TimeZoneChanged(TimeZone),
    Destroy,
}
