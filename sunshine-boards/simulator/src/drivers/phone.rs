use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::Timer;
use sunshine_common::*;
use sunshine_core::SyncRelay;

/// 手机端推送脚本：数据同步通道上的事件批次，JSON 线格式
const DATA_BATCHES: [&str; 4] = [
    r#"[{"kind":"changed","item":{"path":"/weather","data_map":{
        "watch_high":"80","watch_low":"65","watch_desc":"Clear",
        "watch_weather_id":800,"watch_time":1000}}}]"#,
    r#"[{"kind":"deleted","item":{"path":"/weather"}},
        {"kind":"changed","item":{"path":"/weather","data_map":{
        "watch_high":"61","watch_low":"52","watch_desc":"Light rain",
        "watch_weather_id":500,"watch_time":1700000000000}}}]"#,
    r#"[{"kind":"changed","item":{"path":"/weather","data_map":{
        "watch_high":"58","watch_low":"50","watch_desc":"Missing code",
        "watch_time":1700000360000}}}]"#,
    r#"[{"kind":"changed","item":{"path":"/weather","data_map":{
        "watch_high":"77","watch_low":"70","watch_desc":"Thunderstorm",
        "watch_weather_id":211,"watch_time":1700000720000}}}]"#,
];

pub async fn phone_script<M: RawMutex, N: RawMutex>(
    relay: SyncRelay<'_, M>,
    events: FaceChannelSender<'_, N, DataEventBuffer>,
) {
    relay.on_message_received(&MessageEvent {
        path: "/start".into(),
        source_node: "simulated-phone".into(),
        data: Vec::new(),
    });

    for batch in DATA_BATCHES {
        match serde_json::from_str::<DataEventBuffer>(batch) {
            Ok(buffer) => events.send(buffer).await,
            Err(e) => warn!("Skipping unparsable batch: {}", e),
        }
        Timer::after_secs(2).await;
    }

    info!("Phone script finished");
}
