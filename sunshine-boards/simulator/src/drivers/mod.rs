mod assets;
mod config;
mod host;
mod phone;
mod script;

pub use assets::SimAssetSource;
pub use config::load_config;
pub use host::SimHost;
pub use phone::phone_script;
pub use script::host_script;
