mod event_dispatch;
mod face_engine;
mod face_task;
mod update_timer;

#[cfg(test)]
mod test_support;

pub use event_dispatch::dispatch_host_event;
pub use face_engine::WatchFaceEngine;
pub use face_task::face_task;
pub use update_timer::{PendingUpdate, TimerToken, UpdateTimer};
