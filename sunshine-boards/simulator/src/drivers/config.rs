use sunshine_common::*;

/// 读取 `SUNSHINE_CONFIG` 指向的 JSON 覆盖配置，未设置时使用内置预设
pub fn load_config() -> SystemResult<FaceConfig> {
    let Some(path) = std::env::var_os("SUNSHINE_CONFIG") else {
        return Ok(FaceConfig::default());
    };

    let bytes = std::fs::read(&path).map_err(|e| {
        error!("Failed to read {:?}: {}", path, e);
        ServiceError::InvalidConfig
    })?;
    let config = FaceConfig::from_json(&bytes)?;

    info!("Loaded face config from {:?}", path);
    Ok(config)
}
