use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Timer;
use sunshine_common::*;

/// 宿主脚本：模拟一次亮屏、点击、进入与退出环境模式、熄屏的过程
pub async fn host_script<M: RawMutex>(events: FaceChannelSender<'_, M, HostEvent>) {
    events
        .send(HostEvent::PropertiesChanged(DeviceProperties {
            low_bit_ambient: true,
        }))
        .await;
    events
        .send(HostEvent::ApplyWindowInsets(WindowInsets { is_round: true }))
        .await;
    events.send(HostEvent::VisibilityChanged(true)).await;

    Timer::after_millis(2500).await;
    for tap_type in [TapType::Touch, TapType::Tap, TapType::Touch, TapType::TouchCancel] {
        events
            .send(HostEvent::TapCommand(TapCommand::new(tap_type, 160, 160, 0)))
            .await;
    }

    Timer::after_secs(2).await;
    events.send(HostEvent::AmbientModeChanged(true)).await;
    Timer::after_secs(1).await;
    events.send(HostEvent::TimeTick).await;
    Timer::after_secs(1).await;
    events.send(HostEvent::AmbientModeChanged(false)).await;

    Timer::after_secs(2).await;
    events.send(HostEvent::VisibilityChanged(false)).await;
    events.send(HostEvent::Destroy).await;

    info!("Host script finished");
}
