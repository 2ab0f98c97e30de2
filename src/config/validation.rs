use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

/// 配置驗證錯誤，`field` 為 `區段.鍵` 形式的配置路徑
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("配置項 {field} 不能為空")]
    Blank { field: &'static str },

    #[error("配置項 {field} 的值 {value} 不是有效選項，可選值: {options}")]
    UnknownOption {
        field: &'static str,
        value: String,
        options: String,
    },

    #[error("配置項 {field} 的值 {value} 不在範圍 {min}..={max} 內")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

/// 配置區段驗證
pub trait Validator {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// 單個配置項的檢查
pub struct ValidationUtils;

impl ValidationUtils {
    /// 字串不能只有空白
    pub fn not_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::Blank { field });
        }
        Ok(())
    }

    /// 字串必須是選項之一，不區分大小寫
    pub fn one_of_ignore_case(
        value: &str,
        options: &[&str],
        field: &'static str,
    ) -> Result<(), ValidationError> {
        if options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
            return Ok(());
        }
        Err(ValidationError::UnknownOption {
            field,
            value: value.to_string(),
            options: options.join(", "),
        })
    }

    /// 數值必須落在閉區間 `[min, max]` 內
    pub fn in_range<T>(value: T, min: T, max: T, field: &'static str) -> Result<(), ValidationError>
    where
        T: PartialOrd + Display,
    {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value: value.to_string(),
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(())
    }

    /// 時間間隔必須落在閉區間 `[min, max]` 內，錯誤信息以毫秒表示
    pub fn duration_in_range(
        value: Duration,
        min: Duration,
        max: Duration,
        field: &'static str,
    ) -> Result<(), ValidationError> {
        if value < min || value > max {
            return Err(ValidationError::OutOfRange {
                field,
                value: format!("{}ms", value.as_millis()),
                min: format!("{}ms", min.as_millis()),
                max: format!("{}ms", max.as_millis()),
            });
        }
        Ok(())
    }
}
