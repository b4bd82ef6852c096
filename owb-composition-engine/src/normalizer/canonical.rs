/// 生成规范查找键：小写 + 去首尾空白 + 删除全部花括号
/// 花括号用于标记附加标签（如 `{renegade}`），不参与查找
/// 逗号保留，是否拆分复合名称由调用方决定
#[inline]
pub fn canonicalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    lowered
        .trim()
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect()
}

/// 按逗号拆分复合名称，片段去空白，丢弃空片段
#[inline]
pub fn split_composite(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|seg| !seg.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_basic() {
        assert_eq!(canonicalize("  High Elf Prince \n"), "high elf prince");
    }

    #[test]
    fn test_canonicalize_strips_braces_anywhere() {
        assert_eq!(canonicalize("Great Weapon {renegade}"), "great weapon renegade");
        assert_eq!(canonicalize("{Hatred}"), "hatred");
    }

    #[test]
    fn test_canonicalize_keeps_commas() {
        // 逗号拆分是调用方职责
        assert_eq!(canonicalize("Martial Prowess, Valour of Ages"), "martial prowess, valour of ages");
    }

    #[test]
    fn test_canonicalize_unicode_lowercase() {
        assert_eq!(canonicalize("Großer Schild"), "großer schild");
        assert_eq!(canonicalize("ÉPÉE"), "épée");
    }

    #[test]
    fn test_split_composite() {
        let parts: Vec<&str> = split_composite(" Fly (9),  Swiftstride ,, Fear").collect();
        assert_eq!(parts, vec!["Fly (9)", "Swiftstride", "Fear"]);
    }

    #[test]
    fn test_split_composite_empty() {
        assert_eq!(split_composite(" , ").count(), 0);
    }
}
