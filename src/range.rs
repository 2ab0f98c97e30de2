//! 區間重疊檢測
//!
//! 對任意數量的閉區間兩兩比較，找出所有存在交集的區間對（端點相接也算重疊）。
//! 每個區間的端點不要求有序，比較前各自取最小值與最大值。

use std::collections::BTreeMap;
use tracing::trace;

/// 閉區間 `[start, end]`，端點順序不限
pub type Interval<T> = [T; 2];

/// 一條重疊記錄：兩個區間在輸入中的位置及其原始值
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOverlap<T> {
    pub left: (usize, Interval<T>),
    pub right: (usize, Interval<T>),
}

impl<T> RangeOverlap<T> {
    /// 兩個區間在輸入中的位置
    pub fn indices(&self) -> (usize, usize) {
        (self.left.0, self.right.0)
    }

    /// 轉換為 位置 -> 區間 的映射
    pub fn into_map(self) -> BTreeMap<usize, Interval<T>> {
        BTreeMap::from([self.left, self.right])
    }
}

fn min_of<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if a < b {
        a
    } else {
        b
    }
}

fn max_of<'a, T: PartialOrd>(a: &'a T, b: &'a T) -> &'a T {
    if a < b {
        b
    } else {
        a
    }
}

/// 取區間的 (下界, 上界)
pub fn normalize<T: PartialOrd>(interval: &Interval<T>) -> (&T, &T) {
    let [a, b] = interval;
    (min_of(a, b), max_of(a, b))
}

/// 兩個閉區間是否相交
pub fn overlaps<T: PartialOrd>(a: &Interval<T>, b: &Interval<T>) -> bool {
    let (lo1, hi1) = normalize(a);
    let (lo2, hi2) = normalize(b);
    max_of(lo1, lo2) <= min_of(hi1, hi2)
}

/// 判斷是否有重複的區間
///
/// 每對區間只比較一次，外層按第一個位置升序、內層按第二個位置升序輸出結果。
/// 少於兩個區間時返回空列表。記錄中保留區間的原始值（未經端點排序）。
///
/// ```
/// use utilkit::range::has_range_repeat;
///
/// let found = has_range_repeat(&[[0, 5], [5, 10], [11, 12]]);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].indices(), (0, 1));
/// ```
pub fn has_range_repeat<T>(intervals: &[Interval<T>]) -> Vec<RangeOverlap<T>>
where
    T: PartialOrd + Clone,
{
    let mut container = Vec::new();

    for (i, left) in intervals.iter().enumerate() {
        for (offset, right) in intervals[i + 1..].iter().enumerate() {
            if overlaps(left, right) {
                container.push(RangeOverlap {
                    left: (i, left.clone()),
                    right: (i + 1 + offset, right.clone()),
                });
            }
        }
    }

    trace!(
        "區間重疊檢測完成: {} 個區間, {} 組重疊",
        intervals.len(),
        container.len()
    );
    container
}
