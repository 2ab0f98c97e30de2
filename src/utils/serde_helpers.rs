// utils/serde_helpers.rs - 序列化與反序列化輔助函數
use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

/// 將毫秒整數反序列化為 Duration
///
/// 配置檔案中的時間間隔以毫秒整數書寫，例如 `delay_ms = 300`。
///
/// # 使用範例
///
/// ```
/// use serde::Deserialize;
/// use std::time::Duration;
/// use utilkit::utils::serde_helpers::duration_from_millis;
///
/// #[derive(Deserialize)]
/// struct Throttle {
///     #[serde(deserialize_with = "duration_from_millis")]
///     delay_ms: Duration,
/// }
///
/// let t: Throttle = serde_json::from_str(r#"{"delay_ms": 250}"#).unwrap();
/// assert_eq!(t.delay_ms, Duration::from_millis(250));
/// ```
pub fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let ms = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(ms))
}

/// 將 Duration 序列化為毫秒整數
pub fn duration_as_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}
