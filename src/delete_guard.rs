//! 削除確認モジュール
//!
//! 削除リンクのクリック時に確認ダイアログの文言を組み立て、
//! 承認された場合のみ遷移先を返す。

/// 削除確認の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    href: String,
    product_name: String,
}

impl DeletePrompt {
    /// 確認対象を作る
    ///
    /// `href` が無い（または空）場合は確認不要として `None`。
    /// 商品名が取れない場合は `fallback_name` を使う。
    pub fn new(href: Option<&str>, product_name: Option<&str>, fallback_name: &str) -> Option<Self> {
        let href = href.filter(|h| !h.is_empty())?;
        let product_name = product_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback_name);

        Some(Self {
            href: href.to_string(),
            product_name: product_name.to_string(),
        })
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// ダイアログに表示するメッセージ
    pub fn message(&self) -> String {
        format!(
            "⚠️ ALERTA DE SEGURIDAD\n\n¿Está seguro de eliminar \"{}\" del inventario de Olimpo?\n\nEsta acción no se puede deshacer.",
            self.product_name
        )
    }

    /// ユーザーの回答から遷移先を決める
    pub fn resolve(&self, confirmed: bool) -> Option<&str> {
        confirmed.then_some(self.href.as_str())
    }
}
