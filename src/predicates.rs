// predicates.rs - 類型判斷

use crate::value::Value;

/// 判斷是否為純物件
///
/// 陣列、null、日期與函數都不是純物件。
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

/// 判斷是不是函數
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}
