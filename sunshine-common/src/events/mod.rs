//! 事件定义模块
//!
//! - 数据同步事件 (DataEvent)：手机端经同步通道推送
//! - 本地广播 (LocalBroadcast)：同步中继转发给表盘引擎
//! - 宿主事件 (HostEvent)：渲染宿主发出的生命周期回调

pub mod broadcast;
pub mod data;
pub mod host;

pub use broadcast::*;
pub use data::*;
pub use host::*;
