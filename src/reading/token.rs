use std::ops::Index;

/// A single unit of segmented text awaiting vocalization.
///
/// Tokens carry no identity beyond their text; position is their index in
/// the owning [`TokenSequence`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Ordered output of one segmentation run.
///
/// Sequences are never edited in place; a text or language change produces
/// a new sequence that replaces the old one wholesale.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
