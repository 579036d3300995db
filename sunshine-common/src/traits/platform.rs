use embedded_graphics::primitives::Rectangle;
use jiff::tz::TimeZone;

/// 渲染宿主提供给表盘引擎的能力
pub trait WatchFaceHost {
    /// 墙钟时间，Unix 毫秒
    fn now_millis(&self) -> i64;

    fn default_time_zone(&self) -> TimeZone;

    /// 请求尽快重绘一帧
    fn invalidate(&mut self);

    fn register_time_zone_receiver(&mut self);

    fn unregister_time_zone_receiver(&mut self);
}

/// 驱动循环从宿主获取重绘请求
pub trait FrameSource {
    fn take_frame_request(&mut self) -> bool;

    fn bounds(&self) -> Rectangle;
}
