//! イベントハンドラ
//!
//! 各関数は `EventListener` を返す。Drop するとリスナーが外れる。

pub mod delete;
pub mod filter_input;
pub mod scanner;
