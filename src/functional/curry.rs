//! 函數柯里化

use crate::value::{Callable, Value};
use std::rc::Rc;

/// 函數柯里化
///
/// 返回的函數會累積每次調用的參數，累積數量達到 `f` 宣告的參數個數時以全部參數調用 `f`
/// （多出的參數一併傳入）；否則返回一個 `Value::Function`，其參數個數為尚缺的數量。
pub fn curry(f: &Callable) -> Callable {
    resolver(f.clone(), Vec::new())
}

fn resolver(f: Callable, mem: Vec<Value>) -> Callable {
    let remaining = f.arity().saturating_sub(mem.len());
    Callable::new(remaining, move |args| {
        let mut collected = mem.clone();
        collected.extend_from_slice(args);
        if collected.len() >= f.arity() {
            f.call(&collected)
        } else {
            Value::Function(resolver(f.clone(), collected))
        }
    })
}

/// 將二元函數轉換為柯里化形式
///
/// ```
/// use utilkit::functional::curry2;
///
/// let add = curry2(|a: i32, b: i32| a + b);
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    F: Fn(A, B) -> R + 'static,
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| (*f)(a.clone(), b)) as Box<dyn Fn(B) -> R>
    }
}

/// 將三元函數轉換為柯里化形式
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    F: Fn(A, B, C) -> R + 'static,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| (*f)(a.clone(), b.clone(), c)) as Box<dyn Fn(C) -> R>
        }) as Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
    }
}
