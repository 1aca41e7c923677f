use super::{LanguageTag, Token, TokenSequence};

/// Common multi-character Chinese words, in the order they are grouped.
pub const CHINESE_COMMON_WORDS: &[&str] = &[
    "我们", "他们", "你们", "现在", "明天", "今天", "时间", "学习", "工作", "生活", "喜欢", "开心",
    "快乐", "谢谢", "你好", "再见", "吃饭", "睡觉", "看书", "说话",
];

/// Appends a space after every occurrence of each dictionary word.
///
/// Words are applied one after another against the already rewritten text,
/// so later entries see the spaces inserted by earlier ones.
fn group_common_words(text: &str, dictionary: &[&str]) -> String {
    let mut grouped = text.to_string();
    for word in dictionary.iter().filter(|word| !word.is_empty()) {
        grouped = grouped.replace(word, &format!("{} ", word));
    }
    grouped
}

/// Puts every character, spaces included, in its own space-separated slot.
fn expand_characters(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            expanded.push(' ');
        }
        expanded.push(ch);
    }
    expanded
}

fn split_on_whitespace(text: &str) -> TokenSequence {
    text.split_whitespace().map(Token::new).collect()
}

/// Segments `raw_text` using the built-in common-word dictionary.
pub fn segment(raw_text: &str, language: LanguageTag) -> TokenSequence {
    segment_with_dictionary(raw_text, language, CHINESE_COMMON_WORDS)
}

/// Turns raw text into the ordered tokens that playback walks through.
///
/// Whitespace-delimited languages split on runs of whitespace. Dense-script
/// languages run the dictionary grouping pass and then expand every
/// character into its own slot before splitting, which yields exactly one
/// token per non-whitespace character whatever the dictionary holds.
pub fn segment_with_dictionary(
    raw_text: &str,
    language: LanguageTag,
    dictionary: &[&str],
) -> TokenSequence {
    if !language.is_dense_script() {
        return split_on_whitespace(raw_text);
    }

    let grouped = group_common_words(raw_text, dictionary);
    split_on_whitespace(&expand_characters(&grouped))
}
