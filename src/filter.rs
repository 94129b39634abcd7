//! テーブル絞り込みモジュール
//!
//! 行の表示/非表示とセルのハイライトをクエリに合わせて更新する。
//! 行の実体（DOMの`<tr>`やテスト用のメモリ行）は [`FilterRow`] で抽象化する。

use crate::query::Query;
use serde::Serialize;

/// 絞り込み対象になる最小セル数。これ未満は「商品なし」等のプレースホルダ行
pub const MIN_CELLS: usize = 2;

/// 絞り込み対象の行
pub trait FilterRow {
    /// セル数
    fn cell_count(&self) -> usize;

    /// セルの表示テキスト
    fn cell_text(&self, index: usize) -> String;

    /// 行全体の表示テキスト（セルをタブ区切りで連結）
    fn text(&self) -> String {
        (0..self.cell_count())
            .map(|i| self.cell_text(i))
            .collect::<Vec<_>>()
            .join("\t")
    }

    fn set_visible(&mut self, visible: bool);

    fn set_cell_highlight(&mut self, index: usize, highlighted: bool);
}

/// 1回の絞り込み結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
    /// プレースホルダ行（未処理）
    pub skipped: usize,
    pub highlighted_cells: usize,
}

/// 全行にクエリを適用する
pub fn apply_filter<'a, R, I>(rows: I, query: &Query) -> FilterSummary
where
    R: FilterRow + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut R>,
{
    let mut summary = FilterSummary::default();

    for row in rows {
        let cells = row.cell_count();
        if cells < MIN_CELLS {
            summary.skipped += 1;
            continue;
        }

        let matched = query.matches(&row.text());
        row.set_visible(matched);
        if matched {
            summary.shown += 1;
        } else {
            summary.hidden += 1;
        }

        for i in 0..cells {
            let highlighted = query.highlights(&row.cell_text(i));
            row.set_cell_highlight(i, highlighted);
            if highlighted {
                summary.highlighted_cells += 1;
            }
        }
    }

    summary
}

/// メモリ上の行（DOMを持たない環境・テスト用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRow {
    pub cells: Vec<String>,
    pub visible: bool,
    pub highlighted: Vec<bool>,
}

impl MemoryRow {
    pub fn new<S: Into<String>>(cells: impl IntoIterator<Item = S>) -> Self {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let highlighted = vec![false; cells.len()];
        Self {
            cells,
            visible: true,
            highlighted,
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }
}

impl FilterRow for MemoryRow {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell_text(&self, index: usize) -> String {
        self.cells.get(index).cloned().unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_cell_highlight(&mut self, index: usize, highlighted: bool) {
        if let Some(slot) = self.highlighted.get_mut(index) {
            *slot = highlighted;
        }
    }
}
