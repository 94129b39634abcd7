//! 画面設定モジュール
//!
//! 要素ID・セレクタ・デバウンス時間などを保持する。
//! ホスト側（テンプレート）からJSONまたはJSオブジェクトで上書きできる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 在庫画面の設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// 全体検索ボックスのID
    pub search_input_id: String,
    /// スキャナー（クイック入庫）入力のID
    pub scanner_input_id: String,
    /// 数量入力のID
    pub quantity_input_id: String,
    /// 在庫テーブルのセレクタ
    pub table_selector: String,
    /// 行内の商品名セルのセレクタ
    pub name_cell_selector: String,
    /// 削除ボタンのセレクタ
    pub delete_button_selector: String,
    /// 検索ボックスのデバウンス時間（ms）
    pub search_debounce_ms: u32,
    /// スキャナー入力のデバウンス時間（ms）
    pub scanner_debounce_ms: u32,
    /// 一致セルの背景色
    pub highlight_color: String,
    /// Enterで即送信する数量（完全一致）
    pub submit_quantity: String,
    /// 商品名が取れない場合の表示名
    pub fallback_product_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            search_input_id: "global_search_input".into(),
            scanner_input_id: "codigo_scanner".into(),
            quantity_input_id: "cantidad_scanner".into(),
            table_selector: "table.tabla-inventario".into(),
            name_cell_selector: ".fw-bold".into(),
            delete_button_selector: ".btn-action-delete".into(),
            search_debounce_ms: 250,
            scanner_debounce_ms: 150,
            highlight_color: "rgba(184, 134, 11, 0.1)".into(), // 薄い金色
            submit_quantity: "1".into(),
            fallback_product_name: "este artículo".into(),
        }
    }
}

impl UiConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("searchInputId", &self.search_input_id),
            ("scannerInputId", &self.scanner_input_id),
            ("quantityInputId", &self.quantity_input_id),
            ("tableSelector", &self.table_selector),
            ("nameCellSelector", &self.name_cell_selector),
            ("deleteButtonSelector", &self.delete_button_selector),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{} must not be empty", name)));
            }
        }

        if self.search_debounce_ms == 0 {
            return Err(Error::Config("searchDebounceMs must be greater than 0".into()));
        }
        if self.scanner_debounce_ms == 0 {
            return Err(Error::Config("scannerDebounceMs must be greater than 0".into()));
        }

        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.search_debounce_ms))
    }

    pub fn scanner_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.scanner_debounce_ms))
    }
}
