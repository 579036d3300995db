use crate::types::{AssetError, AssetTable};

/// 启动阶段的背景图加载
pub trait AssetLoader {
    /// 解码全部背景图并按 `scale` 缩放，任一失败即整体失败
    fn load_table(&mut self, scale: f32) -> Result<AssetTable, AssetError>;
}
