//! 在庫画面の初期化
//!
//! ホスト側から1回だけ呼ばれる。リスナーとデバウンサーは [`InventoryPage`] が
//! 所有し、Drop（または `detach`）で全て解除される。

use crate::effects::{BrowserEffects, PageEffects};
use crate::elements::PageElements;
use crate::handlers::{self, delete::DeleteGuard, scanner::ScannerFields};
use crate::scheduler::GlooScheduler;
use crate::table::TableFilter;
use gloo::console;
use gloo::events::EventListener;
use inventario_ui::{Debouncer, Error, FilterSummary, Result, Scheduler, UiConfig};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::Document;

/// 初期化済みの在庫画面
pub struct InventoryPage<S: Scheduler + Clone + 'static = GlooScheduler> {
    table: Rc<TableFilter>,
    search: Option<Rc<Debouncer<String, S>>>,
    scanner: Option<Rc<Debouncer<String, S>>>,
    listeners: Vec<EventListener>,
}

impl InventoryPage<GlooScheduler> {
    /// ブラウザのタイマー・ダイアログで初期化
    pub fn attach(document: &Document, config: UiConfig) -> Result<Self> {
        Self::attach_with(document, config, GlooScheduler, Rc::new(BrowserEffects))
    }
}

impl<S: Scheduler + Clone + 'static> InventoryPage<S> {
    pub fn attach_with(
        document: &Document,
        config: UiConfig,
        scheduler: S,
        effects: Rc<dyn PageEffects>,
    ) -> Result<Self> {
        config.validate()?;

        let elements = PageElements::locate(document, &config);
        let table = Rc::new(TableFilter::new(elements.table, config.highlight_color.clone()));
        let mut listeners = Vec::new();

        // 1. 全体検索
        let search = elements.search_input.as_ref().map(|input| {
            let debouncer = filter_debouncer(&table, scheduler.clone(), config.search_debounce());
            listeners.push(handlers::filter_input::attach(input, Rc::clone(&debouncer)));
            console::debug!(format!("search filter attached ({:?})", config.search_debounce()));
            debouncer
        });

        // 2. スキャナー / クイック入庫
        let scanner = elements.scanner_input.as_ref().map(|input| {
            let fields = ScannerFields {
                scanner: input.clone(),
                quantity: elements.quantity_input.clone(),
                form: elements.scanner_form.clone(),
            };
            listeners.push(handlers::scanner::attach(
                fields,
                config.submit_quantity.clone(),
                Rc::clone(&effects),
            ));

            let debouncer = filter_debouncer(&table, scheduler.clone(), config.scanner_debounce());
            listeners.push(handlers::filter_input::attach(input, Rc::clone(&debouncer)));
            console::debug!(format!("scanner input attached ({:?})", config.scanner_debounce()));
            debouncer
        });

        // 3. 削除確認
        if !elements.delete_buttons.is_empty() {
            let guard = Rc::new(DeleteGuard {
                name_selector: config.name_cell_selector.clone(),
                fallback_name: config.fallback_product_name.clone(),
                effects,
            });
            for button in &elements.delete_buttons {
                listeners.push(handlers::delete::attach(button, Rc::clone(&guard)));
            }
            console::debug!(format!("delete guard attached to {} buttons", elements.delete_buttons.len()));
        }

        Ok(Self {
            table,
            search,
            scanner,
            listeners,
        })
    }

    /// デバウンスを通さずに即時絞り込み
    pub fn filter_now(&self, raw: &str) -> FilterSummary {
        self.table.run(raw)
    }

    /// 保留中の絞り込みを全て取り消す
    pub fn cancel_pending(&self) {
        for debouncer in self.search.iter().chain(self.scanner.iter()) {
            debouncer.cancel_pending();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    pub fn has_scanner(&self) -> bool {
        self.scanner.is_some()
    }
}

fn filter_debouncer<S: Scheduler + 'static>(
    table: &Rc<TableFilter>,
    scheduler: S,
    wait: Duration,
) -> Rc<Debouncer<String, S>> {
    let table = Rc::clone(table);
    Rc::new(Debouncer::new(scheduler, wait, move |raw: String| {
        table.run(&raw);
    }))
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| Error::Dom("document is not available".into()))
}

fn to_js(error: Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// JavaScript側に返すハンドル
#[wasm_bindgen]
pub struct InventoryPageHandle {
    page: Option<InventoryPage>,
}

#[wasm_bindgen]
impl InventoryPageHandle {
    /// 即時絞り込み。結果（shown/hidden/skipped/highlightedCells）を返す
    pub fn filter(&self, query: &str) -> std::result::Result<JsValue, JsValue> {
        let summary = self
            .page
            .as_ref()
            .map(|page| page.filter_now(query))
            .unwrap_or_default();
        Ok(serde_wasm_bindgen::to_value(&summary)?)
    }

    /// リスナーとタイマーを全て解除
    pub fn detach(&mut self) {
        if let Some(page) = self.page.take() {
            page.cancel_pending();
            console::debug!(format!("inventory page detached ({} listeners)", page.listener_count()));
        }
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.page.is_some()
    }
}

/// 在庫画面を初期化する
///
/// `options` は `UiConfig` と同じ形のオブジェクト（camelCase）。
/// `undefined` / `null` ならデフォルト設定。
#[wasm_bindgen]
pub fn init_inventory_page(options: JsValue) -> std::result::Result<InventoryPageHandle, JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        UiConfig::default()
    } else {
        serde_wasm_bindgen::from_value::<UiConfig>(options)?
    };

    let document = document().map_err(to_js)?;
    let page = InventoryPage::attach(&document, config).map_err(to_js)?;
    Ok(InventoryPageHandle { page: Some(page) })
}
