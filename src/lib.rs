// 模組定義
pub mod config;
pub mod error;
pub mod format;
pub mod functional;
pub mod logging;
pub mod object;
pub mod patterns;
pub mod predicates;
pub mod query;
pub mod range;
pub mod utils;
pub mod value;

// 重新導出常用組件
pub use error::{UtilError, UtilResult};
pub use format::{fixed_to, fixed_to_default, sublen, sublen_default};
pub use functional::{compose, curry, curry2, curry3, delay_fn, identity, DelayFn, Trigger};
pub use object::{deep_clone, merge_options};
pub use patterns::{regexps, Pattern};
pub use predicates::{is_function, is_plain_object};
pub use query::{url_encode, url_encode_default};
pub use range::{has_range_repeat, Interval, RangeOverlap};
pub use utils::{
    date_to_stamp, date_to_stamp_in, format_date, format_date_default, format_date_in, StampUnit,
};
pub use value::{Callable, Map, Value};
