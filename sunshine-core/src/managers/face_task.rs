use embassy_futures::select::{Either3, select3};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Timer;
use sunshine_common::*;

use crate::managers::event_dispatch::dispatch_host_event;
use crate::managers::face_engine::WatchFaceEngine;

/// 表盘任务
///
/// 同时等待宿主事件、刷新定时器与天气广播，处理后若宿主有重绘请求则绘制一帧。
/// 收到 `Destroy` 后返回。
pub async fn face_task<H, M, N, C>(
    mut engine: WatchFaceEngine<'_, H, M>,
    events: FaceChannelReceiver<'_, N, HostEvent>,
    canvas: &mut C,
) where
    H: WatchFaceHost + FrameSource,
    M: RawMutex,
    N: RawMutex,
    C: FaceCanvas,
{
    info!("Watch face task started");

    loop {
        let update = engine.pending_update();
        let now = engine.host().now_millis();
        let timer = async move {
            match update {
                Some(pending) => {
                    let delay = pending.due_at_ms.saturating_sub(now).max(0) as u64;
                    Timer::after_millis(delay).await;
                    pending.token
                }
                None => core::future::pending().await,
            }
        };

        let selected = select3(events.receive(), timer, engine.wait_weather()).await;
        let keep_running = match selected {
            Either3::First(event) => dispatch_host_event(&mut engine, event),
            Either3::Second(token) => {
                engine.on_update_timer(token);
                true
            }
            Either3::Third(weather) => {
                engine.apply_weather(weather);
                true
            }
        };

        if !keep_running {
            info!("Watch face task stopped");
            return;
        }

        if engine.host_mut().take_frame_request() {
            let bounds = engine.host().bounds();
            engine.on_draw(canvas, bounds);
        }
    }
}
