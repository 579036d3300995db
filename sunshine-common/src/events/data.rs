//! 数据同步事件定义模块
//!
//! 描述从手机端经数据同步通道推送到手表的事件，以及其中携带的键值数据。

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::types::error::PayloadError;

pub const WEATHER_HIGH: &str = "watch_high";
pub const WEATHER_LOW: &str = "watch_low";
pub const WEATHER_DESC: &str = "watch_desc";
pub const WEATHER_ID: &str = "watch_weather_id";
pub const WATCH_TIME: &str = "watch_time";

/// 带类型的值；JSON 中整数能放进 `i32` 时解析为 `Int`，否则为 `Long`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    String(String),
    Int(i32),
    Long(i64),
    Boolean(bool),
    Double(f64),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataMap(BTreeMap<String, DataValue>);

impl DataMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: &str, value: DataValue) -> Option<DataValue> {
        self.0.insert(String::from(key), value)
    }

    pub fn put_string(&mut self, key: &str, value: &str) {
        self.insert(key, DataValue::String(String::from(value)));
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.insert(key, DataValue::Int(value));
    }

    pub fn put_long(&mut self, key: &str, value: i64) {
        self.insert(key, DataValue::Long(value));
    }

    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<DataValue> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_string(&self, key: &'static str) -> Result<&str, PayloadError> {
        match self.get(key) {
            Some(DataValue::String(value)) => Ok(value.as_str()),
            Some(_) => Err(PayloadError::WrongType {
                key,
                expected: "a string",
            }),
            None => Err(PayloadError::MissingField(key)),
        }
    }

    pub fn get_int(&self, key: &'static str) -> Result<i32, PayloadError> {
        match self.get(key) {
            Some(DataValue::Int(value)) => Ok(*value),
            Some(_) => Err(PayloadError::WrongType {
                key,
                expected: "an int",
            }),
            None => Err(PayloadError::MissingField(key)),
        }
    }

    /// 整数会被放宽为长整数，较小的时间戳在传输中可能以整数出现
    pub fn get_long(&self, key: &'static str) -> Result<i64, PayloadError> {
        match self.get(key) {
            Some(DataValue::Long(value)) => Ok(*value),
            Some(DataValue::Int(value)) => Ok(i64::from(*value)),
            Some(_) => Err(PayloadError::WrongType {
                key,
                expected: "a long",
            }),
            None => Err(PayloadError::MissingField(key)),
        }
    }
}

/// 同步数据项
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub path: String,
    #[serde(default)]
    pub data_map: DataMap,
}

impl DataItem {
    pub fn new(path: &str, data_map: DataMap) -> Self {
        Self {
            path: String::from(path),
            data_map,
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, PayloadError> {
        serde_json::from_slice(bytes).map_err(|_| PayloadError::Malformed)
    }

    pub fn to_json(&self) -> Result<Vec<u8>, PayloadError> {
        serde_json::to_vec(self).map_err(|_| PayloadError::Malformed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataEventKind {
    Changed,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEvent {
    pub kind: DataEventKind,
    pub item: DataItem,
}

impl DataEvent {
    pub fn changed(item: DataItem) -> Self {
        Self {
            kind: DataEventKind::Changed,
            item,
        }
    }

    pub fn deleted(item: DataItem) -> Self {
        Self {
            kind: DataEventKind::Deleted,
            item,
        }
    }
}

/// 一次回调中送达的事件批次
pub type DataEventBuffer = Vec<DataEvent>;

/// 手机端发来的一次性消息，不参与天气同步
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub path: String,
    pub source_node: String,
    #[serde(default)]
    pub data: Vec<u8>,
}
