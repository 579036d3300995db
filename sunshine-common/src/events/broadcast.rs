//! 进程内本地广播
//!
//! 同步中继把天气数据发布到这里，表盘引擎按动作标识注册接收者。
//! 目前只有 `local_data` 一个动作，对应一个只保存最新值的 `Watch`，
//! 同一动作内后写覆盖先写，其他动作无法挤掉尚未消费的天气。

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::watch::{Receiver, Watch};

use crate::types::weather::WeatherSnapshot;

/// 天气数据的本地广播动作标识
pub const LOCAL_DATA: &str = "local_data";

pub const MAX_SUBSCRIBERS: usize = 4;

/// 本地广播，每种动作一个变体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalBroadcast {
    Weather(WeatherSnapshot),
}

impl LocalBroadcast {
    pub fn weather(weather: WeatherSnapshot) -> Self {
        LocalBroadcast::Weather(weather)
    }

    pub fn action(&self) -> &'static str {
        match self {
            LocalBroadcast::Weather(_) => LOCAL_DATA,
        }
    }
}

pub struct LocalBroadcastManager<M: RawMutex> {
    local_data: Watch<M, WeatherSnapshot, MAX_SUBSCRIBERS>,
}

impl<M: RawMutex> LocalBroadcastManager<M> {
    pub const fn new() -> Self {
        Self {
            local_data: Watch::new(),
        }
    }

    /// 发送即返回，只覆盖同一动作下尚未消费的广播
    pub fn send_broadcast(&self, broadcast: LocalBroadcast) {
        match broadcast {
            LocalBroadcast::Weather(weather) => self.local_data.sender().send(weather),
        }
    }

    /// 订阅位已满或动作未知时返回 `None`
    pub fn register_receiver(&self, action: &'static str) -> Option<BroadcastReceiver<'_, M>> {
        if action != LOCAL_DATA {
            return None;
        }

        self.local_data
            .receiver()
            .map(|inner| BroadcastReceiver { action, inner })
    }
}

impl<M: RawMutex> Default for LocalBroadcastManager<M> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BroadcastReceiver<'a, M: RawMutex> {
    action: &'static str,
    inner: Receiver<'a, M, WeatherSnapshot, MAX_SUBSCRIBERS>,
}

impl<'a, M: RawMutex> BroadcastReceiver<'a, M> {
    pub fn action(&self) -> &'static str {
        self.action
    }

    /// 取出尚未消费的最新广播
    pub fn try_receive(&mut self) -> Option<WeatherSnapshot> {
        self.inner.try_changed()
    }

    pub async fn receive(&mut self) -> WeatherSnapshot {
        self.inner.changed().await
    }
}
