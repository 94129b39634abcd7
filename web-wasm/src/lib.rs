//! Inventario UI (WASM)
//!
//! サーバー描画済みの在庫画面に、絞り込み・スキャナー入力・削除確認を後付けする。
//! ホスト側は `init_inventory_page()` を1回呼ぶ。

pub mod effects;
pub mod elements;
pub mod handlers;
pub mod page;
pub mod scheduler;
pub mod table;

pub use effects::{BrowserEffects, PageEffects};
pub use elements::PageElements;
pub use page::{init_inventory_page, InventoryPage, InventoryPageHandle};
pub use scheduler::GlooScheduler;
pub use table::{DomRow, TableFilter};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}
