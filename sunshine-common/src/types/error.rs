use thiserror::Error;

use crate::types::weather::BackgroundArt;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemError {
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("service error: {0}")]
    Service(#[from] ServiceError),
}

/// 同步数据项解析错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{key}` is not {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error("malformed data item")]
    Malformed,
}

/// 背景图资源错误，启动阶段出现即视为致命
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    #[error("asset {0:?} not found")]
    NotFound(BackgroundArt),

    #[error("asset {0:?} could not be decoded")]
    DecodeFailed(BackgroundArt),

    #[error("asset {0:?} scales to an empty bitmap")]
    EmptyAfterScale(BackgroundArt),

    #[error("bitmap {width}x{height} does not match {len} pixels")]
    SizeMismatch { width: u32, height: u32, len: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError {
    #[error("no free receiver slot on the local broadcast")]
    NoReceiverSlot,

    #[error("timestamp {0} ms is out of range")]
    InvalidTimestamp(i64),

    #[error("invalid face configuration")]
    InvalidConfig,
}
