use crate::config::loader::{ConfigLoader, Environment};
use crate::config::types::UtilsConfig;
use crate::config::validation::Validator;
use config::ConfigError;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

// 全局配置實例
static CONFIG: OnceCell<UtilsConfig> = OnceCell::new();

/// 獲取工具庫配置實例
///
/// 尚未初始化時嘗試從當前環境加載；加載失敗則使用內建預設值。
pub fn get_config() -> &'static UtilsConfig {
    CONFIG.get_or_init(|| {
        UtilsConfig::load_from_env().unwrap_or_else(|err| {
            warn!("無法加載工具庫配置，使用預設值: {}", err);
            UtilsConfig::default()
        })
    })
}

/// 初始化配置
///
/// 配置加載或驗證失敗時返回錯誤，全局配置保持未初始化。
pub fn init_config() -> Result<&'static UtilsConfig, ConfigError> {
    let utils_config = UtilsConfig::load_from_env()?;

    // 嘗試初始化全局配置
    if CONFIG.set(utils_config).is_err() {
        warn!("配置已經被初始化，跳過重複初始化");
    } else {
        debug!("配置初始化成功，環境：{:?}", Environment::from_env());
    }

    Ok(get_config())
}

/// UtilsConfig 加載方法實現
impl UtilsConfig {
    /// 從環境變數指定的環境加載配置
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let env = Environment::from_env();
        debug!("從環境加載配置: {:?}", env);
        Self::load(env)
    }

    /// 從指定環境加載配置
    pub fn load(env: Environment) -> Result<Self, ConfigError> {
        let config_source = ConfigLoader::load(env)?;

        // 使用 serde 反序列化配置，缺少的區段使用預設值
        let utils_config: UtilsConfig = config_source.try_deserialize()?;

        // 驗證配置
        utils_config
            .validate()
            .map_err(|err| ConfigError::Message(err.to_string()))?;
        debug!("配置驗證通過");

        Ok(utils_config)
    }
}
