//! 函數節流
//!
//! 每次調用都會取消上一次尚未執行的延遲調用。距離本輪首次調用已超過 `must_delay`
//! 時立即執行並重新計時，否則延遲 `delay` 後執行（期間再次調用則以最後一次為準）。
//! 延遲調用在當前 tokio 運行時上以任務形式執行。

use crate::config::ThrottleConfig;
use crate::error::{UtilError, UtilResult};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace};

type Handler<A> = Arc<dyn Fn(A) + Send + Sync>;

/// 單次調用的觸發方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// 已立即執行
    Immediate,
    /// 已排入延遲執行
    Deferred,
}

#[derive(Default)]
struct ThrottleState {
    /// 本輪首次調用的時間
    burst_start: Option<Instant>,
    /// 尚未執行的延遲調用
    pending: Option<JoinHandle<()>>,
}

/// 節流包裝器，計時狀態屬於每個實例
pub struct DelayFn<A> {
    handler: Handler<A>,
    delay: Duration,
    must_delay: Duration,
    state: Mutex<ThrottleState>,
}

/// 函數節流
///
/// * `delay` - 觸發執行的時間間隔
/// * `must_delay` - 必然觸發執行的間隔時間
pub fn delay_fn<A, F>(f: F, delay: Duration, must_delay: Duration) -> DelayFn<A>
where
    F: Fn(A) + Send + Sync + 'static,
    A: Send + 'static,
{
    DelayFn {
        handler: Arc::new(f),
        delay,
        must_delay,
        state: Mutex::new(ThrottleState::default()),
    }
}

impl<A: Send + 'static> DelayFn<A> {
    /// 以配置中的時間間隔建立節流包裝器
    pub fn with_config<F>(f: F, config: &ThrottleConfig) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        delay_fn(f, config.delay, config.must_delay)
    }

    /// 調用被節流的函數
    ///
    /// 需要延遲執行但當前不在 tokio 運行時內時返回 [`UtilError::NoRuntime`]。
    pub fn call(&self, args: A) -> UtilResult<Trigger> {
        let now = Instant::now();
        let mut state = self.state.lock();

        // 先清理上一次的調用觸發
        if let Some(pending) = state.pending.take() {
            pending.abort();
            trace!("取消上一次的延遲調用");
        }

        let burst_start = *state.burst_start.get_or_insert(now);
        if now.duration_since(burst_start) >= self.must_delay {
            state.burst_start = Some(now);
            drop(state);
            debug!("已達必然觸發間隔 {:?}，立即執行", self.must_delay);
            (self.handler)(args);
            return Ok(Trigger::Immediate);
        }

        let runtime = Handle::try_current().map_err(|_| UtilError::NoRuntime)?;
        let handler = Arc::clone(&self.handler);
        let delay = self.delay;
        state.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            handler(args);
        }));
        trace!("延遲 {:?} 後執行", delay);

        Ok(Trigger::Deferred)
    }
}

impl<A> DelayFn<A> {
    /// 取消尚未執行的延遲調用，返回是否確實取消了一個調用
    pub fn cancel(&self) -> bool {
        match self.state.lock().pending.take() {
            Some(pending) => {
                let was_waiting = !pending.is_finished();
                pending.abort();
                was_waiting
            }
            None => false,
        }
    }

    /// 是否有尚未執行的延遲調用
    pub fn has_pending(&self) -> bool {
        self.state
            .lock()
            .pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn must_delay(&self) -> Duration {
        self.must_delay
    }
}

impl<A> Drop for DelayFn<A> {
    fn drop(&mut self) {
        if let Some(pending) = self.state.get_mut().pending.take() {
            pending.abort();
        }
    }
}

impl<A> fmt::Debug for DelayFn<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayFn")
            .field("delay", &self.delay)
            .field("must_delay", &self.must_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<i32>>>, impl Fn(i32) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |x| sink.lock().push(x))
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_call_wins_within_delay() {
        let (calls, f) = recorder();
        let throttled = delay_fn(f, Duration::from_millis(100), Duration::from_secs(10));

        assert_eq!(throttled.call(1).unwrap(), Trigger::Deferred);
        sleep(Duration::from_millis(50)).await;
        assert_eq!(throttled.call(2).unwrap(), Trigger::Deferred);
        assert!(throttled.has_pending());

        sleep(Duration::from_millis(60)).await;
        assert!(calls.lock().is_empty());

        sleep(Duration::from_millis(100)).await;
        assert_eq!(*calls.lock(), vec![2]);
        assert!(!throttled.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_must_delay_forces_immediate_call() {
        let (calls, f) = recorder();
        let throttled = delay_fn(f, Duration::from_millis(100), Duration::from_millis(250));

        for x in 1..=4 {
            assert_eq!(throttled.call(x).unwrap(), Trigger::Deferred);
            sleep(Duration::from_millis(80)).await;
        }
        // 距離首次調用已 320ms
        assert_eq!(throttled.call(5).unwrap(), Trigger::Immediate);
        assert_eq!(*calls.lock(), vec![5]);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*calls.lock(), vec![5]);

        // 新一輪從 5 的執行時間起算
        assert_eq!(throttled.call(6).unwrap(), Trigger::Deferred);
        sleep(Duration::from_millis(150)).await;
        assert_eq!(*calls.lock(), vec![5, 6]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_abort_pending_call() {
        let (calls, f) = recorder();
        let throttled = delay_fn(f, Duration::from_millis(100), Duration::from_secs(10));

        throttled.call(1).unwrap();
        assert!(throttled.cancel());
        assert!(!throttled.cancel());

        throttled.call(2).unwrap();
        drop(throttled);

        sleep(Duration::from_millis(500)).await;
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn test_zero_must_delay_runs_without_runtime() {
        let (calls, f) = recorder();
        let throttled = delay_fn(f, Duration::from_millis(100), Duration::ZERO);

        assert_eq!(throttled.call(1).unwrap(), Trigger::Immediate);
        assert_eq!(throttled.call(2).unwrap(), Trigger::Immediate);
        assert_eq!(*calls.lock(), vec![1, 2]);
    }

    #[test]
    fn test_deferral_requires_runtime() {
        let (calls, f) = recorder();
        let throttled = delay_fn(f, Duration::from_millis(100), Duration::from_secs(10));

        assert_matches!(throttled.call(1), Err(UtilError::NoRuntime));
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn test_with_config() {
        let config = ThrottleConfig {
            delay: Duration::from_millis(20),
            must_delay: Duration::from_millis(40),
        };
        let throttled = DelayFn::with_config(|_: ()| {}, &config);
        assert_eq!(throttled.delay(), Duration::from_millis(20));
        assert_eq!(throttled.must_delay(), Duration::from_millis(40));
    }
}
