/// 转义 LIKE 模式中的通配符
///
/// 用户输入作为搜索关键词拼进 LIKE 时，`%`、`_` 和转义符自身需要转义。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("50%"), "50\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("mathematics"), "mathematics");
    }
}
