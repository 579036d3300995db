use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use jiff::Timestamp;
use jiff::tz::TimeZone;
use sunshine_common::*;

/// 模拟渲染宿主：系统时钟与系统时区，重绘请求只记一个标志
pub struct SimHost {
    bounds: Rectangle,
    frame_requested: bool,
    zone_receiver_registered: bool,
    frames: usize,
}

impl SimHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: Rectangle::new(Point::zero(), Size::new(width, height)),
            frame_requested: false,
            zone_receiver_registered: false,
            frames: 0,
        }
    }
}

impl WatchFaceHost for SimHost {
    fn now_millis(&self) -> i64 {
        Timestamp::now().as_millisecond()
    }

    fn default_time_zone(&self) -> TimeZone {
        TimeZone::system()
    }

    fn invalidate(&mut self) {
        self.frame_requested = true;
    }

    fn register_time_zone_receiver(&mut self) {
        info!("Time zone receiver registered");
        self.zone_receiver_registered = true;
    }

    fn unregister_time_zone_receiver(&mut self) {
        info!("Time zone receiver unregistered");
        self.zone_receiver_registered = false;
    }
}

impl FrameSource for SimHost {
    fn take_frame_request(&mut self) -> bool {
        if !self.frame_requested {
            return false;
        }
        self.frame_requested = false;
        self.frames += 1;
        debug!("Drawing frame #{}", self.frames);
        true
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}
