//! 削除ボタンの確認処理

use crate::effects::PageEffects;
use gloo::events::{EventListener, EventListenerOptions};
use inventario_ui::DeletePrompt;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// 削除ボタン共通の設定
pub struct DeleteGuard {
    pub name_selector: String,
    pub fallback_name: String,
    pub effects: Rc<dyn PageEffects>,
}

/// ボタンを含む行から商品名を取る
fn product_name(button: &Element, name_selector: &str) -> Option<String> {
    let row = button.closest("tr").ok().flatten()?;
    let cell = row.query_selector(name_selector).ok().flatten()?;
    let text = match cell.dyn_ref::<HtmlElement>() {
        Some(cell) => cell.inner_text(),
        None => cell.text_content().unwrap_or_default(),
    };
    Some(text)
}

pub fn attach(button: &Element, guard: Rc<DeleteGuard>) -> EventListener {
    let target = button.clone();
    EventListener::new_with_options(
        button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            // href なし（スタイルだけのボタン）は素通し
            let Some(href) = target.get_attribute("href").filter(|h| !h.is_empty()) else {
                return;
            };
            event.prevent_default();

            let name = product_name(&target, &guard.name_selector);
            let Some(prompt) = DeletePrompt::new(Some(&href), name.as_deref(), &guard.fallback_name) else {
                return;
            };

            let confirmed = guard.effects.confirm(&prompt.message());
            if let Some(href) = prompt.resolve(confirmed) {
                guard.effects.navigate(href);
            }
        },
    )
}
