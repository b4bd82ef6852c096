//! 编制说明展示格式化
//! 空输入统一返回空字符串，渲染层据此跳过整个区块

/// 区块标题
pub const NOTES_HEADING: &str = "Composition notes:";
/// 说明之间的分隔符
pub const NOTES_SEPARATOR: &str = ", ";

/// HTML 片段（页面展示用）
/// `<p class="unit__composition-notes"><b>Composition notes:</b> a, b</p>`
pub fn format_notes_for_display(notes: Option<&[String]>) -> String {
    let Some(notes) = notes.filter(|n| !n.is_empty()) else {
        return String::new();
    };

    let mut out = String::with_capacity(64 + notes.iter().map(|n| n.len() + 2).sum::<usize>());
    out.push_str("<p class=\"unit__composition-notes\"><b>");
    out.push_str(NOTES_HEADING);
    out.push_str("</b> ");
    for (idx, note) in notes.iter().enumerate() {
        if idx > 0 {
            out.push_str(NOTES_SEPARATOR);
        }
        html_escape::encode_text_to_string(note, &mut out);
    }
    out.push_str("</p>");
    out
}

/// 纯文本（打印视图用）
pub fn format_notes_for_print(notes: Option<&[String]>) -> String {
    match notes {
        Some(notes) if !notes.is_empty() => {
            format!("{} {}", NOTES_HEADING, notes.join(NOTES_SEPARATOR))
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_and_absent_return_empty_string() {
        assert_eq!(format_notes_for_display(Some(&[][..])), "");
        assert_eq!(format_notes_for_display(None), "");
        assert_eq!(format_notes_for_print(None), "");
    }

    #[test]
    fn test_display_fragment() {
        let notes = note_list(&["Max 1 per army", "No duplicates"]);
        let html = format_notes_for_display(Some(notes.as_slice()));

        assert!(html.contains(NOTES_HEADING));
        assert!(html.contains("Max 1 per army, No duplicates"));
        assert_eq!(
            html,
            "<p class=\"unit__composition-notes\"><b>Composition notes:</b> Max 1 per army, No duplicates</p>"
        );
    }

    #[test]
    fn test_display_escapes_html() {
        let notes = note_list(&["0-1 <Lords> & Heroes"]);
        assert!(format_notes_for_display(Some(notes.as_slice())).contains("0-1 &lt;Lords&gt; &amp; Heroes"));

        // 元素文本内引号无需转义
        let quoted = note_list(&["Counts as \"Rare\" choice"]);
        assert!(format_notes_for_display(Some(quoted.as_slice())).contains("Counts as \"Rare\" choice"));
    }

    #[test]
    fn test_print_keeps_order() {
        let notes = note_list(&["b", "a"]);
        assert_eq!(format_notes_for_print(Some(notes.as_slice())), "Composition notes: b, a");
    }
}
