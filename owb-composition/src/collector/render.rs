//! 说明渲染格式

use owb_composition_engine::{format_notes_for_display, format_notes_for_print};
use std::fmt;
use std::str::FromStr;

use crate::error::{CompResult, CompositionError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum NoteFormat {
    /// 页面展示片段
    #[default]
    Html,
    /// 打印视图纯文本
    Text,
    /// JSON 数组
    Json,
}

impl NoteFormat {
    /// 渲染说明列表；空列表在 Html/Text 下为空字符串
    pub fn render(self, notes: &[String]) -> CompResult<String> {
        match self {
            NoteFormat::Html => Ok(format_notes_for_display(Some(notes))),
            NoteFormat::Text => Ok(format_notes_for_print(Some(notes))),
            NoteFormat::Json => Ok(serde_json::to_string(notes)?),
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NoteFormat::Html => "html",
            NoteFormat::Text => "text",
            NoteFormat::Json => "json",
        })
    }
}

impl FromStr for NoteFormat {
    type Err = CompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(NoteFormat::Html),
            "text" | "print" => Ok(NoteFormat::Text),
            "json" => Ok(NoteFormat::Json),
            other => Err(CompositionError::InvalidInput(format!("未知的说明格式: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats() {
        let notes = vec!["Max 1 per army".to_string(), "Dwarfs only".to_string()];
        assert!(NoteFormat::Html.render(&notes).unwrap().starts_with("<p"));
        assert_eq!(NoteFormat::Text.render(&notes).unwrap(), "Composition notes: Max 1 per army, Dwarfs only");
        assert_eq!(NoteFormat::Json.render(&notes).unwrap(), r#"["Max 1 per army","Dwarfs only"]"#);
    }

    #[test]
    fn test_empty_render() {
        assert_eq!(NoteFormat::Html.render(&[]).unwrap(), "");
        assert_eq!(NoteFormat::Text.render(&[]).unwrap(), "");
        assert_eq!(NoteFormat::Json.render(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("PRINT".parse::<NoteFormat>().unwrap(), NoteFormat::Text);
        assert_eq!(NoteFormat::Json.to_string().parse::<NoteFormat>().unwrap(), NoteFormat::Json);
        assert!("yaml".parse::<NoteFormat>().is_err());
    }
}
