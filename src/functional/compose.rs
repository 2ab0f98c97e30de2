//! 函數組合（由右至左）

use crate::value::Callable;

/// 恆等函數
pub fn identity<T>(x: T) -> T {
    x
}

/// 函數組合
///
/// `compose(vec![f, g, h])(args) == f(g(h(args)))`。最後一個函數接收全部參數，
/// 其餘函數只接收上一步的結果。沒有函數時返回恆等函數，只有一個時原樣返回。
/// 組合結果的參數個數取最後一個函數的參數個數。
pub fn compose(mut fns: Vec<Callable>) -> Callable {
    let Some(innermost) = fns.pop() else {
        return Callable::identity();
    };
    if fns.is_empty() {
        return innermost;
    }

    Callable::new(innermost.arity(), move |args| {
        let first = innermost.call(args);
        fns.iter()
            .rev()
            .fold(first, |acc, f| f.call(std::slice::from_ref(&acc)))
    })
}

/// 靜態類型的函數組合，由右至左
///
/// ```
/// use utilkit::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::functional::identity
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}
