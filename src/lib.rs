//! Inventario UI Core Library
//!
//! 在庫管理画面（商品テーブル）のクライアント側ロジック。
//! DOMに依存しない部分をここにまとめ、WASM側（web-wasm）から利用する。

pub mod config;
pub mod debounce;
pub mod delete_guard;
pub mod error;
pub mod filter;
pub mod query;
pub mod scanner;

pub use config::UiConfig;
pub use debounce::{Debouncer, ManualScheduler, Scheduler};
pub use delete_guard::DeletePrompt;
pub use error::{Error, Result};
pub use filter::{apply_filter, FilterRow, FilterSummary, MemoryRow};
pub use query::Query;
pub use scanner::{resolve_enter, ScanAction};
