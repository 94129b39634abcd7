//! デバウンスモジュール
//!
//! 連続した呼び出しを最後の1回にまとめ、一定時間入力がなかった後に実行する。
//! タイマーは [`Scheduler`] で差し替え可能（ブラウザでは gloo のタイマー、
//! テストでは [`ManualScheduler`]）。
//!
//! シングルスレッド前提のため `Rc` / `Cell` / `RefCell` のみを使う。

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// 遅延実行の抽象
pub trait Scheduler {
    /// 予約のハンドル（キャンセルに使う）
    type Handle;

    /// `delay` 後に `task` を1回実行する
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// 未実行の予約を取り消す。実行済みのハンドルを渡しても何もしない
    fn cancel(&self, handle: Self::Handle);
}

/// デバウンサー
///
/// `schedule(value)` のたびに保留中の呼び出しを取り消して再予約する。
/// 保留中の呼び出しは常に最大1つ。
pub struct Debouncer<T, S: Scheduler> {
    scheduler: S,
    wait: Duration,
    handler: Rc<dyn Fn(T)>,
    handle: RefCell<Option<S::Handle>>,
    generation: Cell<u64>,
    /// 保留中の予約の世代（なければNone）
    pending: Rc<Cell<Option<u64>>>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new<F>(scheduler: S, wait: Duration, handler: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            scheduler,
            wait,
            handler: Rc::new(handler),
            handle: RefCell::new(None),
            generation: Cell::new(0),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// 呼び出しを予約する（保留中のものは置き換え）
    pub fn schedule(&self, value: T) {
        self.cancel_pending();

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.pending.set(Some(generation));

        let pending = Rc::clone(&self.pending);
        let handler = Rc::clone(&self.handler);
        let task = Box::new(move || {
            // 取り消し済みの予約がスケジューラ側で走っても無視する
            if pending.get() != Some(generation) {
                return;
            }
            pending.set(None);
            handler(value);
        });

        let handle = self.scheduler.schedule(self.wait, task);
        // スケジューラが同期実行した場合、ハンドルは実行済みのものになる
        *self.handle.borrow_mut() = Some(handle);
    }

    /// 保留中の呼び出しを取り消す
    pub fn cancel_pending(&self) {
        self.pending.set(None);
        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl<T, S: Scheduler> Drop for Debouncer<T, S> {
    fn drop(&mut self) {
        self.pending.set(None);
        if let Some(handle) = self.handle.get_mut().take() {
            self.scheduler.cancel(handle);
        }
    }
}

/// 手動で時間を進めるスケジューラ（仮想時刻）
///
/// `advance` で指定時間だけ時計を進め、期限の来たタスクを期限順に実行する。
/// タスク実行中の `now()` はそのタスクの期限時刻になる。
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualState>>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
}

/// [`ManualScheduler`] の予約ハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualTask {
    due: Duration,
    id: u64,
}

impl ManualTask {
    pub fn due(&self) -> Duration {
        self.due
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の仮想時刻（開始からの経過時間）
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// 未実行タスク数
    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// 時計を `by` だけ進め、実行したタスク数を返す
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let mut executed = 0;

        loop {
            let task = {
                let mut state = self.inner.borrow_mut();
                let next = state.tasks.keys().next().copied();
                match next {
                    Some(key) if key.0 <= target => {
                        state.now = key.0;
                        state.tasks.remove(&key)
                    }
                    _ => None,
                }
            };

            // 借用を解放してから実行（タスク内で再予約できるように）
            match task {
                Some(task) => {
                    task();
                    executed += 1;
                }
                None => break,
            }
        }

        self.inner.borrow_mut().now = target;
        executed
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualTask;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
        let mut state = self.inner.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.tasks.insert((due, id), task);
        ManualTask { due, id }
    }

    fn cancel(&self, handle: ManualTask) {
        self.inner.borrow_mut().tasks.remove(&(handle.due, handle.id));
    }
}
