//! 在庫テーブルへの絞り込み適用
//!
//! `<tbody>` の各 `<tr>` を [`FilterRow`] として扱い、共通ライブラリの
//! `apply_filter` で表示/ハイライトを更新する。

use gloo::console;
use inventario_ui::{apply_filter, FilterRow, FilterSummary, Query};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};

/// DOMの行
pub struct DomRow<'a> {
    row: HtmlTableRowElement,
    cells: Vec<HtmlElement>,
    highlight_color: &'a str,
}

impl<'a> DomRow<'a> {
    pub fn new(row: HtmlTableRowElement, highlight_color: &'a str) -> Self {
        let collection = row.cells();
        let cells = (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        Self {
            row,
            cells,
            highlight_color,
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    let result = match value {
        Some(value) => style.set_property(property, value),
        None => style.remove_property(property).map(|_| ()),
    };
    if let Err(e) = result {
        console::warn!(format!("failed to update {}", property), e);
    }
}

impl FilterRow for DomRow<'_> {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell_text(&self, index: usize) -> String {
        self.cells
            .get(index)
            .map(HtmlElement::inner_text)
            .unwrap_or_default()
    }

    fn text(&self) -> String {
        self.row.inner_text()
    }

    fn set_visible(&mut self, visible: bool) {
        let value = if visible { None } else { Some("none") };
        set_style(&self.row, "display", value);
    }

    fn set_cell_highlight(&mut self, index: usize, highlighted: bool) {
        if let Some(cell) = self.cells.get(index) {
            let value = highlighted.then_some(self.highlight_color);
            set_style(cell, "background-color", value);
        }
    }
}

/// テーブル絞り込み
///
/// 行は実行のたびに取り直す（サーバー側で再描画されても追従する）。
pub struct TableFilter {
    table: Option<HtmlTableElement>,
    highlight_color: String,
}

impl TableFilter {
    pub fn new(table: Option<HtmlTableElement>, highlight_color: impl Into<String>) -> Self {
        Self {
            table,
            highlight_color: highlight_color.into(),
        }
    }

    pub fn rows(&self) -> Vec<DomRow<'_>> {
        let Some(table) = &self.table else {
            return Vec::new();
        };

        let bodies = table.t_bodies();
        let mut rows = Vec::new();
        for i in 0..bodies.length() {
            let Some(body) = bodies
                .item(i)
                .and_then(|el| el.dyn_into::<HtmlTableSectionElement>().ok())
            else {
                continue;
            };
            let body_rows = body.rows();
            rows.extend(
                (0..body_rows.length())
                    .filter_map(|j| body_rows.item(j))
                    .filter_map(|el| el.dyn_into::<HtmlTableRowElement>().ok())
                    .map(|row| DomRow::new(row, &self.highlight_color)),
            );
        }
        rows
    }

    /// 生の入力値で絞り込む
    pub fn run(&self, raw: &str) -> FilterSummary {
        let query = Query::new(raw);
        let mut rows = self.rows();
        let summary = apply_filter(rows.iter_mut(), &query);
        console::debug!(format!(
            "filter {:?}: shown={} hidden={} skipped={} highlighted={}",
            query.as_str(),
            summary.shown,
            summary.hidden,
            summary.skipped,
            summary.highlighted_cells
        ));
        summary
    }
}
