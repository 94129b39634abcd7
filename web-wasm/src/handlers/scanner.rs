//! スキャナー欄のEnterキー処理

use crate::effects::PageEffects;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use inventario_ui::scanner::is_submit_key;
use inventario_ui::{resolve_enter, ScanAction};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, KeyboardEvent};

pub struct ScannerFields {
    pub scanner: HtmlInputElement,
    pub quantity: Option<HtmlInputElement>,
    pub form: Option<HtmlFormElement>,
}

pub fn attach(
    fields: ScannerFields,
    submit_quantity: String,
    effects: Rc<dyn PageEffects>,
) -> EventListener {
    let target = fields.scanner.clone();
    EventListener::new_with_options(
        &target,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !is_submit_key(&event.key()) {
                return;
            }
            // ブラウザ標準の暗黙送信は常に止める
            event.prevent_default();

            let quantity = fields.quantity.as_ref().map(HtmlInputElement::value);
            let action = resolve_enter(&fields.scanner.value(), quantity.as_deref(), &submit_quantity);

            match action {
                ScanAction::Submit => match &fields.form {
                    Some(form) => effects.submit(form),
                    None => console::warn!("scanner input is not inside a form"),
                },
                ScanAction::FocusQuantity => {
                    if let Some(quantity) = &fields.quantity {
                        if let Err(e) = quantity.focus() {
                            console::warn!("failed to focus quantity input", e);
                        }
                    }
                }
                ScanAction::Ignore => {}
            }
        },
    )
}
