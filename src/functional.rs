// functional.rs - 函數式工具模組
//
// 動態函數（Callable）的組合與柯里化，靜態類型版本的輔助函數，
// 以及帶必然觸發間隔的節流包裝。

pub mod compose;
pub mod curry;
pub mod throttle;

pub use compose::{compose, identity};
pub use curry::{curry, curry2, curry3};
pub use throttle::{delay_fn, DelayFn, Trigger};
