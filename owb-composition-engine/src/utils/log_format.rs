use std::fmt::{self, Write};

/// 日志预览视图：连续空白折叠为单个空格，超长截断并追加省略号
/// 仅在格式化时遍历源字符串，不产生中间 String
pub struct CompactPreview<'a> {
    source: &'a str,
    max_chars: usize,
}

impl fmt::Display for CompactPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut written = 0;
        let mut pending_space = false;

        for ch in self.source.trim().chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if written >= self.max_chars {
                return f.write_char('…');
            }
            if pending_space {
                f.write_char(' ')?;
                written += 1;
                pending_space = false;
            }
            f.write_char(ch)?;
            written += 1;
        }
        Ok(())
    }
}

#[inline(always)]
pub fn preview_compact(s: &str, max_chars: usize) -> CompactPreview<'_> {
    CompactPreview {
        source: s,
        max_chars,
    }
}

/// 说明列表日志格式：[note1, note2, ...] (total: N)
pub fn compress_note_list<S: AsRef<str>>(notes: &[S]) -> String {
    const MAX_COUNT: usize = 5;
    const MAX_NOTE_LEN: usize = 30;

    if notes.is_empty() {
        return "[empty]".to_string();
    }

    let mut out = String::with_capacity(MAX_COUNT * (MAX_NOTE_LEN + 2) + 20);
    out.push('[');
    for (idx, note) in notes.iter().take(MAX_COUNT).enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", preview_compact(note.as_ref(), MAX_NOTE_LEN));
    }
    if notes.len() > MAX_COUNT {
        let _ = write!(out, ", … (total: {})", notes.len());
    }
    out.push(']');
    out
}
