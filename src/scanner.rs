//! スキャナー（クイック入庫）入力の判定
//!
//! バーコードスキャナーは読み取り後にEnterを送る。
//! 数量が既定値（"1"）ならそのままフォーム送信、それ以外は数量欄に移動して手入力させる。

/// Enterキー押下時の動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanAction {
    /// フォームを送信
    Submit,
    /// 数量欄にフォーカス
    FocusQuantity,
    /// 何もしない
    Ignore,
}

/// 送信トリガーとなるキーか
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Enterキー押下時の動作を決める
///
/// - `code`: スキャナー欄の値（前後空白は無視）
/// - `quantity`: 数量欄の値（欄が存在しなければ `None`）
/// - `submit_quantity`: 即送信する数量。完全一致で比較し、空白除去もしない
pub fn resolve_enter(code: &str, quantity: Option<&str>, submit_quantity: &str) -> ScanAction {
    if code.trim().is_empty() {
        return ScanAction::Ignore;
    }

    match quantity {
        Some(value) if value == submit_quantity => ScanAction::Submit,
        Some(_) => ScanAction::FocusQuantity,
        None => ScanAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_one_submits() {
        assert_eq!(resolve_enter("7701234567", Some("1"), "1"), ScanAction::Submit);
    }

    #[test]
    fn test_other_quantity_focuses() {
        assert_eq!(resolve_enter("7701234567", Some("5"), "1"), ScanAction::FocusQuantity);
    }

    #[test]
    fn test_empty_quantity_focuses() {
        // 空欄は"1"扱いしない
        assert_eq!(resolve_enter("7701234567", Some(""), "1"), ScanAction::FocusQuantity);
        assert_eq!(resolve_enter("7701234567", Some(" 1"), "1"), ScanAction::FocusQuantity);
    }

    #[test]
    fn test_blank_code_ignored() {
        assert_eq!(resolve_enter("   ", Some("1"), "1"), ScanAction::Ignore);
        assert_eq!(resolve_enter("", Some("5"), "1"), ScanAction::Ignore);
    }

    #[test]
    fn test_missing_quantity_field() {
        assert_eq!(resolve_enter("7701234567", None, "1"), ScanAction::Ignore);
    }

    #[test]
    fn test_is_submit_key() {
        assert!(is_submit_key("Enter"));
        assert!(!is_submit_key("Tab"));
        assert!(!is_submit_key("enter"));
    }
}
