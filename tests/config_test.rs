//! 設定ファイル読み込みテスト

#![cfg(not(feature = "wasm"))]

use inventario_ui::{Error, UiConfig};
use tempfile::tempdir;

/// ファイルからの読み込み
#[test]
fn test_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inventario-ui.json");
    std::fs::write(
        &path,
        r#"{ "searchInputId": "buscador", "searchDebounceMs": 300, "fallbackProductName": "el producto" }"#,
    )
    .unwrap();

    let config = UiConfig::from_file(&path).expect("設定読み込み失敗");
    assert_eq!(config.search_input_id, "buscador");
    assert_eq!(config.search_debounce_ms, 300);
    assert_eq!(config.fallback_product_name, "el producto");
    assert_eq!(config.scanner_input_id, "codigo_scanner");
}

/// 存在しないファイル
#[test]
fn test_from_file_not_found() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = UiConfig::from_file(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

/// 不正な値は読み込み時に弾く
#[test]
fn test_from_file_invalid_value() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("inventario-ui.json");
    std::fs::write(&path, r#"{ "searchDebounceMs": 0 }"#).unwrap();

    let result = UiConfig::from_file(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}
