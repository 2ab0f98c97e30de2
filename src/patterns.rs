//! 常用正則模組 - 從 config/patterns.toml 編譯時生成
//!
//! 每個正則同時以 `&'static str` 常量（原始表達式文本）和 [`Pattern`] 枚舉提供，
//! 編譯後的 [`Regex`] 在首次使用時建立並快取。

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

// 包含由 build.rs 生成的正則宏定義
include!(concat!(env!("OUT_DIR"), "/patterns_generated.rs"));

/// 生成正則常量的內部宏
macro_rules! generate_pattern_consts {
    ($(($variant:ident, $konst:ident, $name:literal, $regex:literal, $display:literal)),*) => {
        $(
            #[doc = concat!($display, "：`", $regex, "`")]
            pub const $konst: &str = $regex;
        )*
    };
}

/// 生成正則枚舉的內部宏
macro_rules! generate_pattern_enum {
    ($(($variant:ident, $konst:ident, $name:literal, $regex:literal, $display:literal)),*) => {
        /// 內建正則
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Pattern {
            $(
                $variant,
            )*
        }

        impl Pattern {
            /// 正則表達式文本
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        Pattern::$variant => $konst,
                    )*
                }
            }

            /// 正則名稱
            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        Pattern::$variant => $name,
                    )*
                }
            }

            /// 顯示名稱
            pub fn display_name(&self) -> &'static str {
                match self {
                    $(
                        Pattern::$variant => $display,
                    )*
                }
            }

            /// 獲取所有正則列表
            pub fn all() -> Vec<Pattern> {
                vec![
                    $(
                        Pattern::$variant,
                    )*
                ]
            }
        }
    };
}

patterns!(generate_pattern_consts);
patterns!(generate_pattern_enum);

static COMPILED: Lazy<BTreeMap<Pattern, Regex>> = Lazy::new(|| {
    Pattern::all()
        .into_iter()
        .map(|p| {
            let re = Regex::new(p.as_str()).expect("內建正則表達式無效");
            (p, re)
        })
        .collect()
});

impl Pattern {
    /// 編譯後的正則
    pub fn regex(&self) -> &'static Regex {
        &COMPILED[self]
    }

    /// 判斷文本是否匹配
    pub fn is_match(&self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// 依名稱查找正則
    pub fn from_name(name: &str) -> Option<Pattern> {
        Pattern::all().into_iter().find(|p| p.name() == name)
    }
}

/// 以名稱索引的全部正則
pub fn regexps() -> BTreeMap<&'static str, &'static Regex> {
    COMPILED.iter().map(|(p, re)| (p.name(), re)).collect()
}
