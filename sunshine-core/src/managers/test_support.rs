//! 引擎测试用的宿主与画布替身

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use jiff::tz::TimeZone;
use sunshine_common::*;

pub struct MockHost {
    pub now_ms: i64,
    pub zone: TimeZone,
    pub invalidations: usize,
    pub registrations: usize,
    pub unregistrations: usize,
    pub zone_receiver_registered: bool,
    pub frame_requested: bool,
}

impl MockHost {
    pub fn new(now_ms: i64) -> Self {
        Self {
            now_ms,
            zone: TimeZone::UTC,
            invalidations: 0,
            registrations: 0,
            unregistrations: 0,
            zone_receiver_registered: false,
            frame_requested: false,
        }
    }
}

impl WatchFaceHost for MockHost {
    fn now_millis(&self) -> i64 {
        self.now_ms
    }

    fn default_time_zone(&self) -> TimeZone {
        self.zone.clone()
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
        self.frame_requested = true;
    }

    fn register_time_zone_receiver(&mut self) {
        self.registrations += 1;
        self.zone_receiver_registered = true;
    }

    fn unregister_time_zone_receiver(&mut self) {
        self.unregistrations += 1;
        self.zone_receiver_registered = false;
    }
}

impl FrameSource for MockHost {
    fn take_frame_request(&mut self) -> bool {
        core::mem::take(&mut self.frame_requested)
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(320, 320))
    }
}

/// 位图以宽度区分，见 [`SolidAssets`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Color(Rgb888),
    Rect(Rectangle, Rgb888),
    Bitmap(u32, Point),
    Text(String, Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasFull;

#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    pub fn failing_after(ops: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(ops),
        }
    }

    fn record(&mut self, op: CanvasOp) -> Result<(), CanvasFull> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(CanvasFull);
        }
        self.ops.push(op);
        Ok(())
    }
}

impl FaceCanvas for RecordingCanvas {
    type Error = CanvasFull;

    fn draw_color(&mut self, color: Rgb888) -> Result<(), Self::Error> {
        self.record(CanvasOp::Color(color))
    }

    fn draw_rect(&mut self, area: Rectangle, color: Rgb888) -> Result<(), Self::Error> {
        self.record(CanvasOp::Rect(area, color))
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, top_left: Point) -> Result<(), Self::Error> {
        self.record(CanvasOp::Bitmap(bitmap.width(), top_left))
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        _paint: &TextPaint,
    ) -> Result<(), Self::Error> {
        self.record(CanvasOp::Text(text.into(), origin))
    }
}

/// 每张背景图宽度为 `index + 1` 的纯色位图
#[derive(Default)]
pub struct SolidAssets {
    pub requested_scale: Option<f32>,
    fail: Option<BackgroundArt>,
}

impl SolidAssets {
    pub fn failing(art: BackgroundArt) -> Self {
        Self {
            requested_scale: None,
            fail: Some(art),
        }
    }
}

impl AssetLoader for SolidAssets {
    fn load_table(&mut self, scale: f32) -> Result<AssetTable, AssetError> {
        self.requested_scale = Some(scale);
        if let Some(art) = self.fail {
            return Err(AssetError::DecodeFailed(art));
        }
        Ok(AssetTable::new(core::array::from_fn(|i| {
            Bitmap::solid(i as u32 + 1, 1, [255, 255, 255, 255])
        })))
    }
}
