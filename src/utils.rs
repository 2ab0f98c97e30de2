// utils.rs - 公共工具模組
//
// 時間戳格式化與日期解析，以及配置使用的序列化輔助函數。

pub mod serde_helpers;
pub mod time_utils;

// 重新導出時間工具函數，使其可以通過 utils::function_name 直接訪問
pub use time_utils::{
    date_to_stamp, date_to_stamp_in, format_date, format_date_default, format_date_in, StampUnit,
    DEFAULT_DATE_FORMAT,
};
