use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::events::{DataEventBuffer, HostEvent};

const CAP: usize = 8;

/// 通道类型
pub type FaceChannel<M, T> = Channel<M, T, CAP>;

/// 通道接收者类型
pub type FaceChannelReceiver<'a, M, T> = Receiver<'a, M, T, CAP>;

/// 通道发送者类型
pub type FaceChannelSender<'a, M, T> = Sender<'a, M, T, CAP>;

/// 同步通道 → 同步中继
pub type DataEventChannel<M> = FaceChannel<M, DataEventBuffer>;

/// 渲染宿主 → 表盘任务
pub type HostEventChannel<M> = FaceChannel<M, HostEvent>;
