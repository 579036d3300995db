use embassy_sync::blocking_mutex::raw::RawMutex;
use sunshine_common::*;

/// 数据同步中继
///
/// 把手机端推送的数据项转成本地广播，自身不保存任何状态。
pub struct SyncRelay<'a, M: RawMutex> {
    broadcasts: &'a LocalBroadcastManager<M>,
}

impl<'a, M: RawMutex> SyncRelay<'a, M> {
    pub fn new(broadcasts: &'a LocalBroadcastManager<M>) -> Self {
        Self { broadcasts }
    }

    /// 处理一批数据变更事件，返回发出的广播数量
    ///
    /// 只处理 `Changed` 事件；字段缺失或类型不符的事件记录后丢弃，
    /// 不影响同批次的其他事件。
    pub fn on_data_changed(&self, events: &[DataEvent]) -> usize {
        let mut published = 0;

        for event in events {
            if event.kind != DataEventKind::Changed {
                debug!("Skipping {:?} event on {}", event.kind, event.item.path.as_str());
                continue;
            }

            match WeatherSnapshot::from_data_map(&event.item.data_map) {
                Ok(weather) => {
                    debug!(
                        "Relaying weather code {} observed at {}",
                        weather.condition_code, weather.observed_at
                    );
                    self.broadcasts.send_broadcast(LocalBroadcast::weather(weather));
                    published += 1;
                }
                Err(e) => {
                    warn!("Dropping data item {}: {:?}", event.item.path.as_str(), e);
                }
            }
        }

        published
    }

    pub fn on_message_received(&self, message: &MessageEvent) {
        info!(
            "Message on {} from {} ({} bytes)",
            message.path.as_str(),
            message.source_node.as_str(),
            message.data.len()
        );
    }
}

/// 同步中继任务：逐批消费传输层送来的事件
pub async fn relay_task<M: RawMutex, N: RawMutex>(
    relay: SyncRelay<'_, M>,
    events: FaceChannelReceiver<'_, N, DataEventBuffer>,
) {
    info!("Sync relay started");

    loop {
        let batch = events.receive().await;
        let published = relay.on_data_changed(&batch);
        debug!("Batch of {} events, {} relayed", batch.len(), published);
    }
}
