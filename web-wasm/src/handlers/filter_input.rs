//! 入力欄 → デバウンス → テーブル絞り込み

use gloo::events::EventListener;
use inventario_ui::{Debouncer, Scheduler};
use std::rc::Rc;
use web_sys::HtmlInputElement;

/// `input` イベントごとに現在値をデバウンサーへ渡す
pub fn attach<S>(input: &HtmlInputElement, debouncer: Rc<Debouncer<String, S>>) -> EventListener
where
    S: Scheduler + 'static,
{
    let target = input.clone();
    EventListener::new(input, "input", move |_event| {
        debouncer.schedule(target.value());
    })
}
