// error.rs - 工具函數錯誤類型

use thiserror::Error;

/// 工具函數錯誤
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// 深拷貝的來源不是陣列或物件
    #[error("無法深拷貝的參數類型: {kind}")]
    NotCloneable { kind: &'static str },

    /// 無法解析的日期字串
    #[error("無效的日期字串: {0}")]
    InvalidDate(String),

    /// 延遲調用需要 tokio 運行時
    #[error("節流函數的延遲調用必須在 tokio 運行時內執行")]
    NoRuntime,
}

/// 工具函數結果類型
pub type UtilResult<T> = Result<T, UtilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UtilError::NotCloneable { kind: "number" };
        assert_eq!(err.to_string(), "無法深拷貝的參數類型: number");

        let err = UtilError::InvalidDate("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
