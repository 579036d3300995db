use sunshine_common::*;

/// 把一条宿主事件路由到表盘回调
///
/// 返回 `false` 表示表盘已销毁，调用方应停止事件循环。
pub fn dispatch_host_event<F: WatchFaceCallbacks>(face: &mut F, event: HostEvent) -> bool {
    trace!("Dispatching {:?}", event);

    match event {
        HostEvent::VisibilityChanged(visible) => face.on_visibility_changed(visible),
        HostEvent::AmbientModeChanged(ambient) => face.on_ambient_mode_changed(ambient),
        HostEvent::PropertiesChanged(properties) => face.on_properties_changed(properties),
        HostEvent::ApplyWindowInsets(insets) => face.on_apply_window_insets(insets),
        HostEvent::TapCommand(tap) => face.on_tap_command(tap),
        HostEvent::TimeTick => face.on_time_tick(),
        HostEvent::TimeZoneChanged(zone) => face.on_time_zone_changed(zone),
        HostEvent::Destroy => {
            face.on_destroy();
            return false;
        }
    }

    true
}
