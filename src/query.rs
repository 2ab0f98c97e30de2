//! 查詢字串編碼

use crate::value::{enumeration_order, format_number, Value};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// URI 組件編碼保留的字元：`A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// 轉換值為 get 參數
///
/// 原始值輸出為 `&key=value`；陣列元素的鍵為 `key[i]`，物件欄位的鍵為 `key.field`
/// （`key` 為空時直接使用索引或欄位名）。`encode` 為真時對原始值做 URI 組件編碼。
/// 物件欄位按枚舉順序輸出（陣列索引形式的鍵在前）。
/// `Null`、日期與函數沒有可枚舉的欄位，不輸出任何內容。
///
/// ```
/// use serde_json::json;
/// use utilkit::{query::url_encode, value::Value};
///
/// let params = Value::from(json!({"a": 1, "b": [2, 3]}));
/// assert_eq!(url_encode(&params, "", false), "&a=1&b[0]=2&b[1]=3");
/// ```
pub fn url_encode(value: &Value, key: &str, encode: bool) -> String {
    let mut out = String::new();
    encode_into(&mut out, value, key, encode);
    out
}

/// 以空前綴且不編碼的方式轉換
pub fn url_encode_default(value: &Value) -> String {
    url_encode(value, "", false)
}

fn encode_into(out: &mut String, value: &Value, key: &str, encode: bool) {
    let primitive = match value {
        Value::Null | Value::Date(_) | Value::Function(_) => return,
        Value::String(s) => s.clone(),
        Value::Number(n) => format_number(*n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let child = if key.is_empty() {
                    i.to_string()
                } else {
                    format!("{}[{}]", key, i)
                };
                encode_into(out, item, &child, encode);
            }
            return;
        }
        Value::Object(map) => {
            for (field, item) in enumeration_order(map) {
                let child = if key.is_empty() {
                    field.clone()
                } else {
                    format!("{}.{}", key, field)
                };
                encode_into(out, item, &child, encode);
            }
            return;
        }
    };

    out.push('&');
    out.push_str(key);
    out.push('=');
    if encode {
        out.extend(utf8_percent_encode(&primitive, URI_COMPONENT));
    } else {
        out.push_str(&primitive);
    }
}
