//! 画面要素の参照（ビューモデル）
//!
//! IDやセレクタでの検索は初期化時にここで1回だけ行い、
//! 以降の処理は型付きの要素参照を受け取る。
//! 見つからない要素は `None`（その機能は無効）になる。

use inventario_ui::UiConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTableElement};

/// 在庫画面の要素
#[derive(Debug, Clone, Default)]
pub struct PageElements {
    pub search_input: Option<HtmlInputElement>,
    pub scanner_input: Option<HtmlInputElement>,
    pub quantity_input: Option<HtmlInputElement>,
    /// スキャナー欄を含むフォーム
    pub scanner_form: Option<HtmlFormElement>,
    pub table: Option<HtmlTableElement>,
    pub delete_buttons: Vec<Element>,
}

impl PageElements {
    pub fn locate(document: &Document, config: &UiConfig) -> Self {
        let scanner_input: Option<HtmlInputElement> = input_by_id(document, &config.scanner_input_id);
        let scanner_form = scanner_input.as_ref().and_then(HtmlInputElement::form);

        Self {
            search_input: input_by_id(document, &config.search_input_id),
            quantity_input: input_by_id(document, &config.quantity_input_id),
            scanner_form,
            scanner_input,
            table: document
                .query_selector(&config.table_selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlTableElement>().ok()),
            delete_buttons: select_all(document, &config.delete_button_selector),
        }
    }
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
