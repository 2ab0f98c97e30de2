//! 結構化工具：深拷貝與深度合併

use crate::error::{UtilError, UtilResult};
use crate::value::{compare_keys, Map, Value};

/// 深拷貝
///
/// 來源必須是陣列或物件。巢狀的陣列與物件重新分配，
/// 日期、函數與原始值按原子值拷貝（函數仍共享同一個底層實現）。
pub fn deep_clone(source: &Value) -> UtilResult<Value> {
    match source {
        Value::Array(_) | Value::Object(_) => Ok(clone_value(source)),
        other => Err(UtilError::NotCloneable { kind: other.kind() }),
    }
}

fn clone_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(clone_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), clone_value(v)))
                .collect(),
        ),
        atomic => atomic.clone(),
    }
}

/// 深度合併物件
///
/// 結果先按 `base` 的鍵順序排列；兩側都是純物件的鍵遞歸合併，
/// 其他鍵以 `overrides` 的值為準；僅存在於 `overrides` 的鍵依序追加在後。
/// 最後陣列索引形式的鍵按數值升序移到最前。兩個參數都不會被修改。
pub fn merge_options(base: &Map, overrides: &Map) -> Map {
    let mut merged = Map::with_capacity(base.len() + overrides.len());

    for (key, base_value) in base {
        let value = match (base_value, overrides.get(key)) {
            (Value::Object(b), Some(Value::Object(o))) => Value::Object(merge_options(b, o)),
            (_, Some(override_value)) => override_value.clone(),
            (_, None) => base_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    for (key, value) in overrides {
        if !base.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }

    merged.sort_by(|a, _, b, _| compare_keys(a, b));
    merged
}
