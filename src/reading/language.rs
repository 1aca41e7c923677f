use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the reader can segment and speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageTag {
    #[default]
    Vietnamese,
    Chinese,
    English,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl LanguageTag {
    pub const ALL: [LanguageTag; 3] = [
        LanguageTag::Vietnamese,
        LanguageTag::Chinese,
        LanguageTag::English,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageTag::Vietnamese => "vi-VN",
            LanguageTag::Chinese => "zh-CN",
            LanguageTag::English => "en-US",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageTag::Vietnamese => "Tiếng Việt",
            LanguageTag::Chinese => "中文 (Chinese)",
            LanguageTag::English => "English",
        }
    }

    /// Prompt shown in the text area while no text has been entered.
    pub fn placeholder(self) -> &'static str {
        match self {
            LanguageTag::Vietnamese => "Nhập văn bản cần đọc...",
            LanguageTag::Chinese => "输入要阅读的文字...",
            LanguageTag::English => "Enter text to read...",
        }
    }

    /// Dense-script languages do not mark word boundaries with whitespace.
    pub fn is_dense_script(self) -> bool {
        matches!(self, LanguageTag::Chinese)
    }

    /// Unknown codes fall back to the default, a whitespace-delimited language.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|&tag| tag == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl FromStr for LanguageTag {
    type Err = UnknownLanguage;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
