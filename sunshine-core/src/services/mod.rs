mod sync_relay;

pub use sync_relay::{SyncRelay, relay_task};
