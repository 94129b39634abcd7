//! 検索クエリ

/// 正規化済みの検索クエリ（小文字化・前後空白除去）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空クエリ = 全件表示・ハイライトなし
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// テキストがクエリを含むか（大文字小文字を区別しない部分一致）
    ///
    /// 空クエリは常に一致。
    pub fn matches(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.0)
    }

    /// ハイライト対象か（空クエリでは常にfalse）
    pub fn highlights(&self, text: &str) -> bool {
        !self.is_empty() && text.to_lowercase().contains(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(Query::new("  Ron AÑEJO \t").as_str(), "ron añejo");
        assert!(Query::new("   ").is_empty());
        assert!(Query::default().is_empty());
    }

    #[test]
    fn test_matches_substring() {
        let q = Query::new("AÑE");
        assert!(q.matches("Ron Añejo 750ml"));
        assert!(!q.matches("Aguardiente Antioqueño"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let q = Query::new("");
        assert!(q.matches(""));
        assert!(q.matches("cualquier cosa"));
        assert!(!q.highlights("cualquier cosa"));
    }

    #[test]
    fn test_highlights() {
        let q = Query::new("770");
        assert!(q.highlights("7701234567"));
        assert!(!q.highlights("Ron"));
    }
}
