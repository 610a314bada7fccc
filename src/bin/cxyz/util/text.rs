/// Word-wraps `text` to `width` columns. Words longer than a line, such as
/// long file paths, are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }

        let current_len = current.chars().count();
        if current.is_empty() {
            current = word;
        } else if current_len + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Shortens `s` to at most `max_len` characters by dropping the front, so
/// that the end of a file name stays visible.
pub fn truncate(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        return s.to_string();
    }
    if max_len == 0 {
        return String::new();
    }

    let keep = max_len - 1;
    let tail: String = s.chars().skip(len - keep).collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_short_text() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn wrap_long_text() {
        assert_eq!(wrap("the quick brown fox", 10), vec!["the quick", "brown fox"]);
    }

    #[test]
    fn wrap_splits_long_paths() {
        assert_eq!(
            wrap("open /data/abcdefghij.xyz", 10),
            vec!["open", "/data/abcd", "efghij.xyz"]
        );
    }

    #[test]
    fn wrap_empty_text() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn truncate_short() {
        assert_eq!(truncate("si.xyz", 10), "si.xyz");
    }

    #[test]
    fn truncate_keeps_file_extension() {
        assert_eq!(truncate("very-long-structure.xyz", 8), "…ure.xyz");
    }

    #[test]
    fn truncate_unicode() {
        assert_eq!(truncate("日本語テスト.xyz", 6), "…ト.xyz");
    }
}
