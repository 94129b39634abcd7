//! ブラウザタイマーによるスケジューラ

use gloo::timers::callback::Timeout;
use inventario_ui::Scheduler;
use std::time::Duration;

/// `setTimeout` ベースのスケジューラ
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }

    fn cancel(&self, handle: Timeout) {
        // Drop で clearTimeout される
        drop(handle);
    }
}
