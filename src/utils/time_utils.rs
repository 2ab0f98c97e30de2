// time_utils.rs
//
// 提供時間戳與日期字串互相轉換的工具函數。
// 主要功能：
// 1. 以 y/M/d/h/m/s 標記模板格式化時間戳（自動識別秒與毫秒）
// 2. 將日期字串解析為秒或毫秒時間戳

use crate::config::get_config;
use crate::error::{UtilError, UtilResult};
use chrono::{
    DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc,
};
use tracing::debug;

/// 預設日期模板
pub const DEFAULT_DATE_FORMAT: &str = "yyyy-MM-dd hh:mm:ss";

/// 十位數字的時間戳視為秒
const SECONDS_DIGITS: usize = 10;

/// 時間戳單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StampUnit {
    /// 秒（10 位）
    #[default]
    Seconds,
    /// 毫秒（13 位）
    Milliseconds,
}

impl StampUnit {
    /// 依位數選擇單位：13 為毫秒，其餘為秒
    pub fn from_digits(len: usize) -> Self {
        if len == 13 {
            StampUnit::Milliseconds
        } else {
            StampUnit::Seconds
        }
    }
}

//
// 時間戳 -> 日期字串
//

/// 將時間戳格式化為日期字串（本地時區）
///
/// 時間戳為 0 時返回空字串；十位數字視為秒，其餘視為毫秒。
pub fn format_date(timestamp: i64, fmt: &str) -> String {
    format_date_in(timestamp, fmt, &Local)
}

/// 以配置中的預設模板格式化時間戳（本地時區）
pub fn format_date_default(timestamp: i64) -> String {
    format_date(timestamp, &get_config().date.default_format)
}

/// 將時間戳按指定時區格式化為日期字串
///
/// 模板標記：`y` 年、`M` 月、`d` 日、`h` 時（24 小時制）、`m` 分、`s` 秒。
/// 每種標記只替換第一段連續出現；長度為 1 時不補零，長度 ≥2 時補零至兩位。
/// 年份從第 `4 - n` 個字元起截取（n 為標記長度，起點為負時從末尾倒數）。
pub fn format_date_in<Tz: TimeZone>(timestamp: i64, fmt: &str, tz: &Tz) -> String {
    if timestamp == 0 {
        return String::new();
    }

    let millis = if timestamp.to_string().len() == SECONDS_DIGITS {
        timestamp.checked_mul(1000)
    } else {
        Some(timestamp)
    };

    let Some(date) = millis.and_then(|ms| tz.timestamp_millis_opt(ms).single()) else {
        debug!("時間戳超出可表示範圍: {}", timestamp);
        return String::new();
    };

    let mut out = replace_first_run(fmt, 'y', |len| year_digits(date.year(), len));

    let fields = [
        ('M', date.month()),
        ('d', date.day()),
        ('h', date.hour()),
        ('m', date.minute()),
        ('s', date.second()),
    ];
    for (token, value) in fields {
        out = replace_first_run(&out, token, |len| {
            if len == 1 {
                value.to_string()
            } else {
                format!("{:02}", value)
            }
        });
    }

    out
}

/// 年份標記的輸出：從第 `4 - len` 個字元開始截取年份字串
///
/// 起點為負時從末尾倒數，因此 `yyyyy` 只保留最後一位，`yyyyyy` 保留最後兩位。
fn year_digits(year: i32, len: usize) -> String {
    let year = year.to_string();
    let start = 4 - len as isize;
    let from = if start >= 0 {
        (start as usize).min(year.len())
    } else {
        year.len().saturating_sub(start.unsigned_abs())
    };
    year[from..].to_string()
}

/// 替換模板中第一段連續的標記字元
fn replace_first_run(fmt: &str, token: char, render: impl FnOnce(usize) -> String) -> String {
    let Some(start) = fmt.find(token) else {
        return fmt.to_string();
    };
    let run = fmt[start..].chars().take_while(|&c| c == token).count();
    let end = start + run * token.len_utf8();
    format!("{}{}{}", &fmt[..start], render(run), &fmt[end..])
}

//
// 日期字串 -> 時間戳
//

/// 無時區信息的日期時間格式，按本地時間解釋
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// 將日期字串轉換為時間戳（本地時區）
pub fn date_to_stamp(input: &str, unit: StampUnit) -> UtilResult<i64> {
    date_to_stamp_in(input, unit, &Local)
}

/// 將日期字串按指定時區轉換為時間戳
///
/// 帶時區的 RFC 3339 / RFC 2822 字串直接換算；`YYYY-MM-DD` 視為 UTC 零點；
/// 其他無時區格式按 `tz` 的本地時間解釋。結果向零截斷為整數。
pub fn date_to_stamp_in<Tz: TimeZone>(input: &str, unit: StampUnit, tz: &Tz) -> UtilResult<i64> {
    let trimmed = input.trim();
    let millis = parse_millis(trimmed, tz).ok_or_else(|| {
        debug!("無法解析日期字串: {:?}", input);
        UtilError::InvalidDate(input.to_string())
    })?;

    Ok(match unit {
        StampUnit::Seconds => millis / 1000,
        StampUnit::Milliseconds => millis,
    })
}

fn parse_millis<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight).timestamp_millis());
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y/%m/%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::FixedOffset;
    use rstest::rstest;
    use serial_test::serial;

    fn utc8() -> FixedOffset {
        FixedOffset::east_opt(8 * 3600).unwrap()
    }

    #[test]
    fn test_seconds_and_millis_are_detected() {
        assert_eq!(
            format_date(1_700_000_000, "yyyy-MM-dd"),
            format_date(1_700_000_000_000, "yyyy-MM-dd")
        );
        assert_eq!(
            format_date_in(1_700_000_000, DEFAULT_DATE_FORMAT, &Utc),
            "2023-11-14 22:13:20"
        );
    }

    #[test]
    fn test_zero_timestamp_is_empty() {
        assert_eq!(format_date(0, DEFAULT_DATE_FORMAT), "");
    }

    #[rstest]
    #[case("yyyy-MM-dd hh:mm:ss", "2023-11-15 06:13:20")]
    #[case("yy/M/d h:m:s", "23/11/15 6:13:20")]
    #[case("y", "3")]
    #[case("yyy", "023")]
    #[case("yyyyy", "3")]
    #[case("yyyyyy", "23")]
    #[case("yyyyyyyy", "2023")]
    #[case("yyyyyyyyy", "2023")]
    #[case("MM月dd日", "11月15日")]
    #[case("hh:mm (hh)", "06:13 (hh)")]
    #[case("-- : --", "-- : --")]
    fn test_format_tokens(#[case] fmt: &str, #[case] expected: &str) {
        assert_eq!(format_date_in(1_700_000_000_000, fmt, &utc8()), expected);
    }

    #[test]
    #[serial]
    fn test_format_date_default_template() {
        assert_eq!(format_date_default(0), "");
        assert_eq!(
            format_date_default(1_700_000_000),
            format_date(1_700_000_000, DEFAULT_DATE_FORMAT)
        );
    }

    #[rstest]
    #[case(2023, 2, "23")]
    #[case(987, 4, "987")]
    #[case(987, 3, "87")]
    #[case(12345, 4, "12345")]
    #[case(12345, 6, "45")]
    fn test_year_digits(#[case] year: i32, #[case] len: usize, #[case] expected: &str) {
        assert_eq!(year_digits(year, len), expected);
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert_eq!(format_date_in(i64::MAX, DEFAULT_DATE_FORMAT, &Utc), "");
    }

    #[rstest]
    #[case("2023-11-14 22:13:20", 1_700_000_000)]
    #[case("2023-11-14T22:13:20", 1_700_000_000)]
    #[case("2023-11-14T22:13:20Z", 1_700_000_000)]
    #[case("2023-11-15T06:13:20+08:00", 1_700_000_000)]
    #[case("Tue, 14 Nov 2023 22:13:20 +0000", 1_700_000_000)]
    #[case("2023/11/14 22:13:20", 1_700_000_000)]
    #[case("2023-11-14", 1_699_920_000)]
    #[case("1969-12-31T23:59:59.500Z", 0)]
    fn test_date_to_stamp_seconds(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(date_to_stamp_in(input, StampUnit::Seconds, &Utc).unwrap(), expected);
    }

    #[test]
    fn test_date_to_stamp_local_offset() {
        let secs = date_to_stamp_in("2023-11-15 06:13:20", StampUnit::Seconds, &utc8()).unwrap();
        assert_eq!(secs, 1_700_000_000);

        // 純日期按 UTC 解釋，與時區無關
        let secs = date_to_stamp_in("2023-11-14", StampUnit::Seconds, &utc8()).unwrap();
        assert_eq!(secs, 1_699_920_000);
    }

    #[test]
    fn test_date_to_stamp_millis() {
        let unit = StampUnit::from_digits(13);
        assert_eq!(unit, StampUnit::Milliseconds);
        assert_eq!(
            date_to_stamp_in("2023-11-14 22:13:20.123", unit, &Utc).unwrap(),
            1_700_000_000_123
        );
        assert_eq!(StampUnit::from_digits(10), StampUnit::Seconds);
        assert_eq!(StampUnit::default(), StampUnit::Seconds);
    }

    #[test]
    fn test_date_to_stamp_invalid() {
        assert_matches!(
            date_to_stamp("not a date", StampUnit::Seconds),
            Err(UtilError::InvalidDate(s)) if s == "not a date"
        );
    }

    #[test]
    fn test_round_trip_through_local_zone() {
        let stamp = date_to_stamp("2024-02-29 12:34:56", StampUnit::Seconds).unwrap();
        assert_eq!(format_date(stamp, DEFAULT_DATE_FORMAT), "2024-02-29 12:34:56");
    }
}
