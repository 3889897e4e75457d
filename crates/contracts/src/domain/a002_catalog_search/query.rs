/// Запросы короче этого не фильтруют каталог
pub const MIN_QUERY_CHARS: usize = 2;

/// Нормализованный запрос: без пробелов по краям, в нижнем регистре
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Нормализует ввод; `None`, если запрос короче `min_chars` символов
    pub fn parse(raw: &str, min_chars: usize) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.chars().count() < min_chars {
            return None;
        }
        Some(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Разбивает текст на куски (фрагмент, совпал ли он с запросом).
/// Сравнение без учёта регистра; куски склеиваются обратно в исходный текст.
pub fn highlight_segments(text: &str, query: &SearchQuery) -> Vec<(String, bool)> {
    let needle = query.as_str();

    // Смещения в нижнем регистре совпадают с исходными, только если каждый символ
    // переходит ровно в один символ той же длины
    if needle.is_empty() || !text.chars().all(lowercases_in_place) {
        return vec![(text.to_string(), false)];
    }
    let lower = text.to_lowercase();

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = lower[last..].find(needle) {
        let start = last + pos;
        let end = start + needle.len();
        if start > last {
            segments.push((text[last..start].to_string(), false));
        }
        segments.push((text[start..end].to_string(), true));
        last = end;
    }
    if last < text.len() {
        segments.push((text[last..].to_string(), false));
    }
    segments
}

fn lowercases_in_place(c: char) -> bool {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l.len_utf8() == c.len_utf8(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes() {
        let query = SearchQuery::parse("  Solar ", MIN_QUERY_CHARS).unwrap();
        assert_eq!(query.as_str(), "solar");
    }

    #[test]
    fn test_parse_rejects_short_queries() {
        assert!(SearchQuery::parse("", MIN_QUERY_CHARS).is_none());
        assert!(SearchQuery::parse("a", MIN_QUERY_CHARS).is_none());
        assert!(SearchQuery::parse("  a   ", MIN_QUERY_CHARS).is_none());
        assert!(SearchQuery::parse("ab", MIN_QUERY_CHARS).is_some());
    }

    #[test]
    fn test_highlight_segments() {
        let query = SearchQuery::parse("re", MIN_QUERY_CHARS).unwrap();
        let segments = highlight_segments("Renewable Energy Reserve", &query);
        assert_eq!(
            segments,
            vec![
                ("Re".to_string(), true),
                ("newable Energy ".to_string(), false),
                ("Re".to_string(), true),
                ("serve".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_highlight_without_match() {
        let query = SearchQuery::parse("zzz", MIN_QUERY_CHARS).unwrap();
        assert_eq!(
            highlight_segments("Renewable Energy", &query),
            vec![("Renewable Energy".to_string(), false)]
        );
    }

    #[test]
    fn test_highlight_skips_text_with_shifting_case_widths() {
        // ẞ → ß короче на байт, İ → i̇ длиннее на байт: общая длина та же
        let query = SearchQuery::parse("i\u{307}x", MIN_QUERY_CHARS).unwrap();
        assert_eq!(
            highlight_segments("ẞİx", &query),
            vec![("ẞİx".to_string(), false)]
        );
    }

    #[test]
    fn test_highlight_non_ascii_same_width() {
        let query = SearchQuery::parse("öko", MIN_QUERY_CHARS).unwrap();
        assert_eq!(
            highlight_segments("Ökologie", &query),
            vec![("Öko".to_string(), true), ("logie".to_string(), false)]
        );
    }
}
