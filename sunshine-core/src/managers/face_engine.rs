use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use jiff::tz::TimeZone;
use sunshine_common::*;

use crate::managers::update_timer::{PendingUpdate, TimerToken, UpdateTimer};

/// 天气表盘引擎
///
/// 持有当前天气快照、表盘时钟、点击计数与刷新定时器，
/// 由渲染宿主通过 [`WatchFaceCallbacks`] 驱动。
pub struct WatchFaceEngine<'a, H: WatchFaceHost, M: RawMutex> {
    host: H,
    config: FaceConfig,
    assets: AssetTable,
    receiver: BroadcastReceiver<'a, M>,
    weather: WeatherSnapshot,
    clock: FaceClock,
    text_paint: TextPaint,
    x_offset: i32,
    tap_count: u32,
    visible: bool,
    ambient: bool,
    low_bit_ambient: bool,
    zone_receiver_registered: bool,
    timer: UpdateTimer,
}

impl<'a, H: WatchFaceHost, M: RawMutex> WatchFaceEngine<'a, H, M> {
    /// 创建引擎：校验配置、加载背景图并注册 `local_data` 广播
    ///
    /// 背景图加载失败时创建失败。
    pub fn create<L: AssetLoader>(
        host: H,
        config: FaceConfig,
        loader: &mut L,
        broadcasts: &'a LocalBroadcastManager<M>,
    ) -> SystemResult<Self> {
        config.validate()?;

        let assets = loader.load_table(config.art_scale)?;
        let receiver = broadcasts
            .register_receiver(LOCAL_DATA)
            .ok_or(ServiceError::NoReceiverSlot)?;

        let mut clock = FaceClock::new(host.default_time_zone());
        clock.set_to_now(host.now_millis())?;

        let geometry = config.geometry(false);
        let text_paint = TextPaint {
            color: config.text(),
            size: geometry.text_size,
            anti_alias: true,
        };

        info!("Watch face created");

        Ok(Self {
            host,
            config,
            assets,
            receiver,
            weather: WeatherSnapshot::default(),
            clock,
            text_paint,
            x_offset: geometry.x_offset,
            tap_count: 0,
            visible: false,
            ambient: false,
            low_bit_ambient: false,
            zone_receiver_registered: false,
            timer: UpdateTimer::new(config.update_rate_ms),
        })
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn weather(&self) -> &WeatherSnapshot {
        &self.weather
    }

    pub fn clock(&self) -> &FaceClock {
        &self.clock
    }

    pub fn text_paint(&self) -> &TextPaint {
        &self.text_paint
    }

    pub fn x_offset(&self) -> i32 {
        self.x_offset
    }

    pub fn tap_count(&self) -> u32 {
        self.tap_count
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_ambient(&self) -> bool {
        self.ambient
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn pending_update(&self) -> Option<PendingUpdate> {
        self.timer.pending()
    }

    /// 整体替换天气快照，不重绘
    pub fn apply_weather(&mut self, weather: WeatherSnapshot) {
        info!(
            "Weather updated: code {}, observed at {}",
            weather.condition_code, weather.observed_at
        );
        self.weather = weather;
    }

    /// 取出尚未消费的广播，返回快照是否被替换
    pub fn poll_weather(&mut self) -> bool {
        match self.receiver.try_receive() {
            Some(weather) => {
                self.apply_weather(weather);
                true
            }
            None => false,
        }
    }

    pub async fn wait_weather(&mut self) -> WeatherSnapshot {
        self.receiver.receive().await
    }

    /// 刷新定时器到期
    ///
    /// 已取消或被替换的标识直接忽略。
    pub fn on_update_timer(&mut self, token: TimerToken) {
        if !self.timer.fire(token) {
            trace!("Ignoring stale update timer");
            return;
        }

        self.host.invalidate();

        if self.should_timer_be_running() {
            let now = self.host.now_millis();
            self.timer.schedule_next(now);
        }
    }

    fn should_timer_be_running(&self) -> bool {
        self.visible && !self.ambient
    }

    /// 先取消待触发的更新，条件满足时立即排程一次
    fn update_timer(&mut self) {
        self.timer.cancel();
        if self.should_timer_be_running() {
            let now = self.host.now_millis();
            self.timer.schedule_at(now);
        }
    }

    fn register_zone_receiver(&mut self) {
        if self.zone_receiver_registered {
            return;
        }
        self.zone_receiver_registered = true;
        self.host.register_time_zone_receiver();
    }

    fn unregister_zone_receiver(&mut self) {
        if !self.zone_receiver_registered {
            return;
        }
        self.zone_receiver_registered = false;
        self.host.unregister_time_zone_receiver();
    }

    fn resync_clock(&mut self) {
        if let Err(e) = self.clock.set_to_now(self.host.now_millis()) {
            warn!("Clock resync failed: {:?}", e);
        }
    }

    fn draw_frame<C: FaceCanvas>(
        &mut self,
        canvas: &mut C,
        bounds: Rectangle,
    ) -> Result<(), C::Error> {
        if self.ambient {
            canvas.draw_color(self.config.ambient_background())?;
        } else {
            canvas.draw_rect(bounds, self.config.background_for_taps(self.tap_count))?;

            if let Some(art) = self.weather.background_art() {
                let origin = Point::new(
                    self.x_offset + self.config.art_x_shift,
                    self.config.y_offset_art,
                );
                canvas.draw_bitmap(self.assets.get(art), origin)?;
            }
        }

        self.resync_clock();
        let clock_text = self.clock.text(self.ambient);
        canvas.draw_text(
            &clock_text,
            Point::new(self.x_offset, self.config.y_offset),
            &self.text_paint,
        )?;

        // 环境模式下同样绘制温度行
        let temperature = self.weather.temperature_line();
        canvas.draw_text(
            &temperature,
            Point::new(
                self.x_offset + self.config.temperature_x_shift,
                self.config.y_offset_temperature,
            ),
            &self.text_paint,
        )
    }
}

impl<'a, H: WatchFaceHost, M: RawMutex> WatchFaceCallbacks for WatchFaceEngine<'a, H, M> {
    fn on_destroy(&mut self) {
        self.timer.cancel();
        self.unregister_zone_receiver();
        info!("Watch face destroyed");
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        debug!("Visibility changed: {}", visible);
        self.visible = visible;

        if visible {
            self.register_zone_receiver();
            self.clock.clear(self.host.default_time_zone());
            self.resync_clock();
        } else {
            self.unregister_zone_receiver();
        }

        self.update_timer();
    }

    fn on_ambient_mode_changed(&mut self, in_ambient_mode: bool) {
        if self.ambient != in_ambient_mode {
            debug!("Ambient mode changed: {}", in_ambient_mode);
            self.ambient = in_ambient_mode;
            if self.low_bit_ambient {
                self.text_paint.anti_alias = !in_ambient_mode;
            }
            self.host.invalidate();
        }

        self.update_timer();
    }

    fn on_properties_changed(&mut self, properties: DeviceProperties) {
        self.low_bit_ambient = properties.low_bit_ambient;
    }

    fn on_apply_window_insets(&mut self, insets: WindowInsets) {
        let geometry = self.config.geometry(insets.is_round);
        self.x_offset = geometry.x_offset;
        self.text_paint.size = geometry.text_size;
    }

    fn on_tap_command(&mut self, tap: TapCommand) {
        if tap.tap_type == TapType::Tap {
            self.tap_count = self.tap_count.wrapping_add(1);
            debug!("Tap #{} at ({}, {})", self.tap_count, tap.x, tap.y);
        }
        self.host.invalidate();
    }

    fn on_time_tick(&mut self) {
        self.host.invalidate();
    }

    fn on_time_zone_changed(&mut self, zone: TimeZone) {
        if !self.zone_receiver_registered {
            trace!("Time zone change ignored while hidden");
            return;
        }
        self.clock.clear(zone);
        self.resync_clock();
    }

    fn on_draw<C: FaceCanvas>(&mut self, canvas: &mut C, bounds: Rectangle) {
        self.poll_weather();

        if let Err(e) = self.draw_frame(canvas, bounds) {
            error!("Draw failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::managers::test_support::{CanvasOp, MockHost, RecordingCanvas, SolidAssets};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embedded_graphics::prelude::Size;
    use jiff::tz;

    // 2024-01-01T14:05:03.250Z
    const NOW_MS: i64 = 1_704_117_903_250;

    type Engine<'a> = WatchFaceEngine<'a, MockHost, NoopRawMutex>;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(320, 320))
    }

    fn engine(broadcasts: &LocalBroadcastManager<NoopRawMutex>) -> Engine<'_> {
        WatchFaceEngine::create(
            MockHost::new(NOW_MS),
            FaceConfig::default(),
            &mut SolidAssets::default(),
            broadcasts,
        )
        .unwrap()
    }

    fn tap(tap_type: TapType) -> TapCommand {
        TapCommand::new(tap_type, 10, 10, 0)
    }

    #[test]
    fn starts_with_clear_sky_defaults() {
        let broadcasts = LocalBroadcastManager::new();
        let engine = engine(&broadcasts);
        assert_eq!(engine.weather(), &WeatherSnapshot::default());
        assert_eq!(engine.weather().condition_code, 800);
        assert!(!engine.is_timer_running());
    }

    #[test]
    fn asset_failure_is_fatal() {
        let broadcasts = LocalBroadcastManager::<NoopRawMutex>::new();
        let mut loader = SolidAssets::failing(BackgroundArt::Fog);
        let result = WatchFaceEngine::create(
            MockHost::new(NOW_MS),
            FaceConfig::default(),
            &mut loader,
            &broadcasts,
        );
        assert_eq!(
            result.err(),
            Some(SystemError::Asset(AssetError::DecodeFailed(BackgroundArt::Fog)))
        );
    }

    #[test]
    fn assets_are_loaded_at_configured_scale() {
        let broadcasts = LocalBroadcastManager::<NoopRawMutex>::new();
        let mut loader = SolidAssets::default();
        let _engine = WatchFaceEngine::create(
            MockHost::new(NOW_MS),
            FaceConfig::default(),
            &mut loader,
            &broadcasts,
        )
        .unwrap();
        assert_eq!(loader.requested_scale, Some(0.25));
    }

    #[test]
    fn timer_runs_only_when_visible_and_interactive() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);

        engine.on_visibility_changed(true);
        assert!(engine.is_timer_running());
        assert_eq!(engine.pending_update().unwrap().due_at_ms, NOW_MS);

        engine.on_ambient_mode_changed(true);
        assert!(!engine.is_timer_running());

        engine.on_ambient_mode_changed(false);
        assert!(engine.is_timer_running());

        engine.on_visibility_changed(false);
        assert!(!engine.is_timer_running());
    }

    #[test]
    fn firing_redraws_and_reschedules_on_the_second() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_visibility_changed(true);
        let first = engine.pending_update().unwrap();

        engine.on_update_timer(first.token);
        assert_eq!(engine.host().invalidations, 1);

        let next = engine.pending_update().unwrap();
        assert_ne!(next.token, first.token);
        assert_eq!(next.due_at_ms, NOW_MS + 750);
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_visibility_changed(true);
        let stale = engine.pending_update().unwrap().token;

        engine.on_ambient_mode_changed(true);
        let invalidations = engine.host().invalidations;
        engine.on_update_timer(stale);

        assert_eq!(engine.host().invalidations, invalidations);
        assert!(!engine.is_timer_running());
    }

    #[test]
    fn firing_after_going_ambient_does_not_reschedule() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_visibility_changed(true);
        let token = engine.pending_update().unwrap().token;

        // 模拟在到期处理前状态已变化但定时器未被重算
        engine.ambient = true;
        engine.on_update_timer(token);

        assert_eq!(engine.host().invalidations, 1);
        assert!(!engine.is_timer_running());
    }

    #[test]
    fn destroy_cancels_pending_update() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_visibility_changed(true);
        let token = engine.pending_update().unwrap().token;

        engine.on_destroy();
        assert!(!engine.is_timer_running());
        assert!(!engine.host().zone_receiver_registered);

        engine.on_update_timer(token);
        assert_eq!(engine.host().invalidations, 0);
    }

    #[test]
    fn zone_receiver_registration_is_idempotent() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);

        engine.on_visibility_changed(true);
        engine.on_visibility_changed(true);
        assert_eq!(engine.host().registrations, 1);

        engine.on_visibility_changed(false);
        engine.on_visibility_changed(false);
        assert_eq!(engine.host().unregistrations, 1);
    }

    #[test]
    fn becoming_visible_resyncs_to_the_default_zone() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.host_mut().zone = TimeZone::fixed(tz::offset(-5));

        engine.on_visibility_changed(true);
        assert_eq!(engine.clock().text(false).as_str(), "9:05:03");
    }

    #[test]
    fn zone_changes_only_apply_while_registered() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);

        engine.on_time_zone_changed(TimeZone::fixed(tz::offset(2)));
        assert_eq!(engine.clock().text(true).as_str(), "14:05");

        engine.on_visibility_changed(true);
        engine.on_time_zone_changed(TimeZone::fixed(tz::offset(2)));
        assert_eq!(engine.clock().text(true).as_str(), "16:05");
    }

    #[test]
    fn ambient_side_effects_only_on_change() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_properties_changed(DeviceProperties {
            low_bit_ambient: true,
        });

        engine.on_ambient_mode_changed(true);
        assert!(!engine.text_paint().anti_alias);
        assert_eq!(engine.host().invalidations, 1);

        engine.on_ambient_mode_changed(true);
        assert_eq!(engine.host().invalidations, 1);

        engine.on_ambient_mode_changed(false);
        assert!(engine.text_paint().anti_alias);
        assert_eq!(engine.host().invalidations, 2);
    }

    #[test]
    fn anti_alias_kept_without_low_bit_ambient() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_ambient_mode_changed(true);
        assert!(engine.text_paint().anti_alias);
    }

    #[test]
    fn only_completed_taps_count() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        let config = FaceConfig::default();

        engine.on_tap_command(tap(TapType::Touch));
        engine.on_tap_command(tap(TapType::TouchCancel));
        assert_eq!(engine.tap_count(), 0);

        engine.on_tap_command(tap(TapType::Tap));
        assert_eq!(engine.tap_count(), 1);
        assert_eq!(engine.host().invalidations, 3);

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());
        assert_eq!(
            canvas.ops[0],
            CanvasOp::Rect(bounds(), config.background_for_taps(1))
        );

        engine.on_tap_command(tap(TapType::Tap));
        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());
        assert_eq!(
            canvas.ops[0],
            CanvasOp::Rect(bounds(), config.background_for_taps(0))
        );
    }

    #[test]
    fn round_insets_switch_geometry() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        assert_eq!(engine.x_offset(), 15);

        engine.on_apply_window_insets(WindowInsets { is_round: true });
        assert_eq!(engine.x_offset(), 25);
        assert_eq!(engine.text_paint().size, 45);

        engine.on_apply_window_insets(WindowInsets { is_round: false });
        assert_eq!(engine.x_offset(), 15);
        assert_eq!(engine.text_paint().size, 40);
    }

    #[test]
    fn interactive_draw_layout() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.apply_weather(WeatherSnapshot::new("75", "60", "Rain", 501, 0));

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());

        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::Rect(bounds(), FaceConfig::default().background_for_taps(0)),
                CanvasOp::Bitmap(BackgroundArt::Rain.index() as u32 + 1, Point::new(75, 150)),
                CanvasOp::Text("14:05:03".into(), Point::new(15, 80)),
                CanvasOp::Text("75  60".into(), Point::new(55, 130)),
            ]
        );
    }

    #[test]
    fn ambient_draw_never_paints_bitmaps() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.apply_weather(WeatherSnapshot::new("75", "60", "Clear", 800, 0));
        engine.on_ambient_mode_changed(true);

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());

        assert_eq!(
            canvas.ops,
            vec![
                CanvasOp::Color(FaceConfig::default().ambient_background()),
                CanvasOp::Text("14:05".into(), Point::new(15, 80)),
                CanvasOp::Text("75  60".into(), Point::new(55, 130)),
            ]
        );
    }

    #[test]
    fn unknown_code_draws_background_only() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.apply_weather(WeatherSnapshot::new("1", "0", "?", 900, 0));

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());
        assert!(!canvas.ops.iter().any(|op| matches!(op, CanvasOp::Bitmap(..))));
        assert_eq!(canvas.ops.len(), 3);
    }

    #[test]
    fn canvas_errors_are_swallowed() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);

        let mut canvas = RecordingCanvas::failing_after(1);
        engine.on_draw(&mut canvas, bounds());
        assert_eq!(canvas.ops.len(), 1);
    }

    #[test]
    fn draw_drains_the_hand_off() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        broadcasts.send_broadcast(LocalBroadcast::weather(
            WeatherSnapshot::new("3", "-2", "Snow", 601, 7),
        ));
        assert_eq!(engine.weather().condition_code, 800);

        let mut canvas = RecordingCanvas::default();
        engine.on_draw(&mut canvas, bounds());

        assert_eq!(engine.weather().condition_code, 601);
        assert!(canvas.ops.contains(&CanvasOp::Bitmap(
            BackgroundArt::Snow.index() as u32 + 1,
            Point::new(75, 150)
        )));
    }

    #[test]
    fn time_tick_requests_a_redraw() {
        let broadcasts = LocalBroadcastManager::new();
        let mut engine = engine(&broadcasts);
        engine.on_time_tick();
        assert_eq!(engine.host().invalidations, 1);
    }
}
