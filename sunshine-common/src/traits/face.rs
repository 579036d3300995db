use embedded_graphics::primitives::Rectangle;
use jiff::tz::TimeZone;

use crate::traits::canvas::FaceCanvas;
use crate::types::{DeviceProperties, TapCommand, WindowInsets};

/// 渲染宿主调用的表盘回调
///
/// 所有回调都在宿主的渲染线程上执行，必须尽快返回且不得 panic。
pub trait WatchFaceCallbacks {
    fn on_destroy(&mut self);

    fn on_visibility_changed(&mut self, visible: bool);

    fn on_ambient_mode_changed(&mut self, in_ambient_mode: bool);

    fn on_properties_changed(&mut self, properties: DeviceProperties);

    fn on_apply_window_insets(&mut self, insets: WindowInsets);

    fn on_tap_command(&mut self, tap: TapCommand);

    /// 宿主每分钟一次的时间刻度（环境模式下的唯一刷新来源）
    fn on_time_tick(&mut self);

    fn on_time_zone_changed(&mut self, zone: TimeZone);

    fn on_draw<C: FaceCanvas>(&mut self, canvas: &mut C, bounds: Rectangle);
}
