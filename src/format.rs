//! 字串與數字格式化

use crate::config::get_config;
use crate::value::format_number;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::*;
use std::fmt::Display;

/// 截取字串的預設長度
pub const DEFAULT_SUBLEN: usize = 8;

/// 保留小數的預設位數
pub const DEFAULT_DECIMALS: usize = 4;

/// 截斷後追加的省略標記
pub const ELLIPSIS: &str = "...";

// 寬鬆浮點數前綴：符號、整數、小數、指數或 Infinity
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("浮點數前綴正則無效")
});

/// 截取字串長度
///
/// 長度按字元計算，超出 `length` 時保留前 `length` 個字元並追加 `...`。
pub fn sublen(value: &str, length: usize) -> String {
    if value.is_empty() {
        return String::new();
    }
    match value.char_indices().nth(length) {
        Some((cut, _)) => format!("{}{}", &value[..cut], ELLIPSIS),
        None => value.to_string(),
    }
}

/// 以配置中的預設長度截取字串
pub fn sublen_default(value: &str) -> String {
    sublen(value, get_config().text.sublen_length)
}

/// 解析字串開頭的浮點數，忽略前導空白與尾隨字元
///
/// 除 `Infinity` 外也接受 Rust 浮點數的 `inf` / `-inf` 輸出（須為完整內容）。
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let text = input.trim_start();
    match text.trim_end() {
        "inf" | "+inf" => return Some(f64::INFINITY),
        "-inf" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let matched = FLOAT_PREFIX.find(text)?.as_str();
    let unsigned = matched.trim_start_matches(['+', '-']);
    let negative = matched.starts_with('-');

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// 四捨五入保留 n 位小數
///
/// 值先渲染為字串再寬鬆解析；無法解析時，空字串返回空字串，其他返回 `"0"`。
/// 取捨按浮點數的精確二進制值進行，恰好一半時遠離零。
pub fn fixed_to<V: Display>(value: V, decimals: usize) -> String {
    let raw = value.to_string();
    match parse_float_prefix(&raw) {
        Some(n) => to_fixed(n, decimals),
        None if raw.is_empty() => String::new(),
        None => "0".to_string(),
    }
}

/// 以配置中的預設位數保留小數
pub fn fixed_to_default<V: Display>(value: V) -> String {
    fixed_to(value, get_config().text.fixed_decimals)
}

fn to_fixed(n: f64, decimals: usize) -> String {
    if !n.is_finite() || n.abs() >= 1e21 {
        return format_number(n);
    }

    // 負數按絕對值取捨後補回符號，捨入為零時仍保留 `-`
    let digits = fixed_magnitude(n.abs(), decimals);
    if n < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn fixed_magnitude(n: f64, decimals: usize) -> String {
    let scale = decimals as u32;
    if let Some(exact) = Decimal::from_f64_retain(n) {
        let mut rounded = exact.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(scale);
        if rounded.scale() == scale {
            return rounded.to_string();
        }
    }

    format!("{:.*}", decimals, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serial_test::serial;

    #[rstest]
    #[case("hello world", 5, "hello...")]
    #[case("hi", 5, "hi")]
    #[case("exact", 5, "exact")]
    #[case("", 5, "")]
    #[case("中文字串截取", 2, "中文...")]
    fn test_sublen(#[case] value: &str, #[case] length: usize, #[case] expected: &str) {
        assert_eq!(sublen(value, length), expected);
    }

    #[test]
    #[serial]
    fn test_sublen_default_length() {
        assert_eq!(sublen_default("abcdefghij"), "abcdefgh...");
    }

    #[rstest]
    #[case("3.14", Some(3.14))]
    #[case("  -2e3xyz", Some(-2000.0))]
    #[case(".5", Some(0.5))]
    #[case("12.5px", Some(12.5))]
    #[case("-Infinity", Some(f64::NEG_INFINITY))]
    #[case("abc", None)]
    #[case("", None)]
    #[case("-", None)]
    #[case("inf", Some(f64::INFINITY))]
    #[case("-inf", Some(f64::NEG_INFINITY))]
    #[case("information", None)]
    fn test_parse_float_prefix(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_float_prefix(input), expected);
    }

    #[test]
    fn test_fixed_to() {
        assert_eq!(fixed_to(3.14159, 2), "3.14");
        assert_eq!(fixed_to("", 2), "");
        assert_eq!(fixed_to("abc", 2), "0");
        assert_eq!(fixed_to(" ", 2), "0");
        assert_eq!(fixed_to("7", 2), "7.00");
        assert_eq!(fixed_to(42, 0), "42");
    }

    #[test]
    fn test_fixed_to_rounding() {
        assert_eq!(fixed_to(2.5, 0), "3");
        assert_eq!(fixed_to(-2.5, 0), "-3");
        assert_eq!(fixed_to(0.125, 2), "0.13");
        // 1.005 的二進制值略小於 1.005
        assert_eq!(fixed_to(1.005, 2), "1.00");
        assert_eq!(fixed_to(dec!(1.23456), 3), "1.235");
    }

    #[test]
    fn test_fixed_to_non_finite() {
        assert_eq!(fixed_to("Infinity", 2), "Infinity");
        assert_eq!(fixed_to(f64::NEG_INFINITY, 2), "-Infinity");
        assert_eq!(fixed_to(f64::INFINITY, 2), "Infinity");
        assert_eq!(fixed_to(f32::NEG_INFINITY, 0), "-Infinity");
        assert_eq!(fixed_to(f64::NAN, 2), "0");
    }

    #[rstest]
    #[case(1e21, 2, "1e+21")]
    #[case(-1.5e22, 2, "-1.5e+22")]
    #[case(1e20, 1, "100000000000000000000.0")]
    #[case(-0.0001, 2, "-0.00")]
    #[case(-0.0, 2, "0.00")]
    #[case(-1.25, 1, "-1.3")]
    #[case(0.000001, 7, "0.0000010")]
    fn test_fixed_to_magnitude_and_sign(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(fixed_to(value, decimals), expected);
    }

    #[test]
    #[serial]
    fn test_fixed_to_default_decimals() {
        assert_eq!(fixed_to_default(1.5), "1.5000");
    }
}
