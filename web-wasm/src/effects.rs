//! ページ外部への副作用（確認ダイアログ・遷移・フォーム送信）
//!
//! テストで置き換えられるようにトレイトで切り出す。

use gloo::console;
use web_sys::HtmlFormElement;

pub trait PageEffects {
    /// ネイティブ確認ダイアログ。OKならtrue
    fn confirm(&self, message: &str) -> bool;

    fn navigate(&self, href: &str);

    fn submit(&self, form: &HtmlFormElement);
}

/// 実ブラウザでの実装
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEffects;

impl PageEffects for BrowserEffects {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(e) => {
                console::warn!("confirm failed", e);
                false
            }
        }
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            console::warn!(format!("navigation to {} failed", href), e);
        }
    }

    fn submit(&self, form: &HtmlFormElement) {
        if let Err(e) = form.submit() {
            console::warn!("form submit failed", e);
        }
    }
}
