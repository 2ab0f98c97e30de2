use crate::config::validation::{ValidationError, ValidationUtils, Validator};
use crate::format::{DEFAULT_DECIMALS, DEFAULT_SUBLEN};
use crate::utils::serde_helpers::{duration_as_millis, duration_from_millis};
use crate::utils::time_utils::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 工具庫配置結構
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsConfig {
    pub log: LogConfig,
    pub date: DateConfig,
    pub text: TextConfig,
    pub throttle: ThrottleConfig,
}

impl Validator for UtilsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        // 驗證各個部分的配置
        self.log.validate()?;
        self.date.validate()?;
        self.text.validate()?;
        self.throttle.validate()?;

        Ok(())
    }
}

/// 日誌配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Validator for LogConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::one_of_ignore_case(&self.level, &["trace", "debug", "info", "warn", "error"], "log.level")?;
        ValidationUtils::one_of_ignore_case(&self.format, &["pretty", "json"], "log.format")?;

        Ok(())
    }
}

/// 日期格式化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    pub default_format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            default_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Validator for DateConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_blank(&self.default_format, "date.default_format")
    }
}

/// 字串與數字格式化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// sublen 的預設截取長度
    pub sublen_length: usize,
    /// fixed_to 的預設小數位數
    pub fixed_decimals: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            sublen_length: DEFAULT_SUBLEN,
            fixed_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Validator for TextConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::in_range(self.sublen_length, 1, 4096, "text.sublen_length")?;
        // 與宿主 toFixed 的上限一致
        ValidationUtils::in_range(self.fixed_decimals, 0, 100, "text.fixed_decimals")?;

        Ok(())
    }
}

/// 節流間隔的上限
const MAX_THROTTLE_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// 節流配置，配置檔案中以毫秒書寫
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    #[serde(
        rename = "delay_ms",
        deserialize_with = "duration_from_millis",
        serialize_with = "duration_as_millis"
    )]
    pub delay: Duration,
    #[serde(
        rename = "must_delay_ms",
        deserialize_with = "duration_from_millis",
        serialize_with = "duration_as_millis"
    )]
    pub must_delay: Duration,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(300),
            must_delay: Duration::from_millis(1000),
        }
    }
}

impl Validator for ThrottleConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::duration_in_range(self.delay, Duration::from_millis(1), MAX_THROTTLE_INTERVAL, "throttle.delay_ms")?;
        ValidationUtils::duration_in_range(self.must_delay, Duration::ZERO, MAX_THROTTLE_INTERVAL, "throttle.must_delay_ms")?;

        Ok(())
    }
}
