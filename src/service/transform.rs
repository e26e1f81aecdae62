//! 字符串变换
//!
//! 纯函数，无共享状态，可并发调用

use crate::error::ServiceError;

/// Reverse 操作的结果前缀
pub const REVERSE_PREFIX: &str = "the name reversed is: ";

/// CharReplace 操作的结果前缀
pub const REPLACE_PREFIX: &str = "the character changed to *: ";

/// 被替换的字符
pub const REPLACED_CHAR: char = 'i';

/// 按字符（Unicode scalar value）反转 name，并加上结果前缀
pub fn reverse_name(name: &str) -> String {
    let mut message = String::with_capacity(REVERSE_PREFIX.len() + name.len());
    message.push_str(REVERSE_PREFIX);
    message.extend(name.chars().rev());
    message
}

/// 将 name 中所有的 'i' 替换为 chara 的第一个字符，并加上结果前缀
///
/// chara 为空时返回 `ServiceError::InvalidArgument`，chara 第一个字符之后的内容被忽略
pub fn replace_char(name: &str, chara: &str) -> Result<String, ServiceError> {
    let replacement = chara.chars().next().ok_or_else(|| {
        ServiceError::InvalidArgument("chara 不能为空，需要提供一个替换字符".to_string())
    })?;

    let mut message = String::with_capacity(REPLACE_PREFIX.len() + name.len());
    message.push_str(REPLACE_PREFIX);
    message.extend(
        name.chars()
            .map(|c| if c == REPLACED_CHAR { replacement } else { c }),
    );
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip<'a>(message: &'a str, prefix: &str) -> &'a str {
        message.strip_prefix(prefix).expect("缺少结果前缀")
    }

    #[test]
    fn test_reverse_name() {
        assert_eq!(reverse_name("hello"), "the name reversed is: olleh");
        assert_eq!(reverse_name("a"), "the name reversed is: a");
    }

    #[test]
    fn test_reverse_name_empty() {
        assert_eq!(reverse_name(""), "the name reversed is: ");
    }

    #[test]
    fn test_reverse_name_unicode() {
        // 按 code point 反转，不做大小写和规范化处理
        assert_eq!(reverse_name("AbÇ中文"), "the name reversed is: 文中ÇbA");
        assert_eq!(reverse_name("añb"), "the name reversed is: bña");
    }

    #[test]
    fn test_reverse_name_involution() {
        for s in ["", "x", "racecar", "hello world", "日本語テキスト", "Mixed Case 123"] {
            let once = strip(&reverse_name(s), REVERSE_PREFIX).to_string();
            let twice = strip(&reverse_name(&once), REVERSE_PREFIX).to_string();
            assert_eq!(twice, s);
        }
    }

    #[test]
    fn test_replace_char() {
        assert_eq!(
            replace_char("civic", "x").unwrap(),
            "the character changed to *: cxvxc"
        );
    }

    #[test]
    fn test_replace_char_no_match() {
        assert_eq!(
            replace_char("abc", "z").unwrap(),
            "the character changed to *: abc"
        );
        assert_eq!(replace_char("", "z").unwrap(), "the character changed to *: ");
    }

    #[test]
    fn test_replace_char_only_lowercase_i() {
        assert_eq!(
            replace_char("Idiom", "o").unwrap(),
            "the character changed to *: Idoom"
        );
    }

    #[test]
    fn test_replace_char_uses_first_char_only() {
        assert_eq!(
            replace_char("hi", "xyz").unwrap(),
            "the character changed to *: hx"
        );
        assert_eq!(
            replace_char("mini", "€$").unwrap(),
            "the character changed to *: m€n€"
        );
    }

    #[test]
    fn test_replace_char_other_chars_unchanged() {
        let name = "invisible ink, i.e. indigo";
        let message = replace_char(name, "_").unwrap();
        let suffix = strip(&message, REPLACE_PREFIX);

        assert_eq!(suffix.chars().count(), name.chars().count());
        for (before, after) in name.chars().zip(suffix.chars()) {
            if before == REPLACED_CHAR {
                assert_eq!(after, '_');
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_replace_char_empty_chara() {
        let err = replace_char("hi", "").unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }
}
