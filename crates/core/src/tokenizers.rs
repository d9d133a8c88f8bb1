//! Text tokenizers
//!
//! Provides the `Tokenizer` trait and the two granularities the aligner diffs
//! at: whole lines and words. Every tokenizer here is lossless, so the token
//! texts concatenate back to the input.

/// Represents a byte span in text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharSpan {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Kind of text a token covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Line,
    Word,
    Number,
    Punctuation,
    Whitespace,
}

/// Represents a single token borrowed from the tokenized text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text
    pub text: &'a str,

    /// Position span in the tokenized text
    pub span: CharSpan,

    /// Token index in the sequence
    pub index: usize,

    pub kind: TokenKind,
}

/// Trait for tokenizers that split text into tokens
pub trait Tokenizer: Send + Sync {
    /// Split `text` into tokens whose texts concatenate back to `text`
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    /// Get the name of this tokenizer
    fn name(&self) -> &str;

    /// Clone this tokenizer into a Box
    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

// Implement Clone for Box<dyn Tokenizer>
impl Clone for Box<dyn Tokenizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Tokenizers
// ============================================================================

/// Line tokenizer. Each token keeps its terminating `\n`; only the last line
/// of a text may lack one.
#[derive(Clone, Default)]
pub struct LineTokenizer;

impl Tokenizer for LineTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut start = 0;

        text.split_inclusive('\n')
            .enumerate()
            .map(|(index, line)| {
                let span = CharSpan::new(start, start + line.len());
                start = span.end;
                Token {
                    text: line,
                    span,
                    index,
                    kind: TokenKind::Line,
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "line"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

/// Whitespace-preserving word tokenizer.
///
/// Words, numbers and whitespace are grouped into maximal runs; every ASCII
/// punctuation character becomes a token of its own.
#[derive(Clone, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut current: Option<(usize, TokenKind)> = None;

        for (pos, ch) in text.char_indices() {
            let kind = classify_char(ch);

            match current {
                Some((_, prev)) if prev == kind && kind != TokenKind::Punctuation => {}
                Some((start, prev)) => {
                    push_token(&mut tokens, text, start, pos, prev);
                    current = Some((pos, kind));
                }
                None => current = Some((pos, kind)),
            }
        }

        if let Some((start, kind)) = current {
            push_token(&mut tokens, text, start, text.len(), kind);
        }

        tokens
    }

    fn name(&self) -> &str {
        "word"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}

fn classify_char(ch: char) -> TokenKind {
    if ch.is_whitespace() {
        TokenKind::Whitespace
    } else if ch.is_ascii_punctuation() {
        TokenKind::Punctuation
    } else if ch.is_numeric() {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

fn push_token<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, start: usize, end: usize, kind: TokenKind) {
    tokens.push(Token {
        text: &text[start..end],
        span: CharSpan::new(start, end),
        index: tokens.len(),
        kind,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_line_tokenizer() {
        let tokens = LineTokenizer.tokenize("a\nbb\n\nc");

        assert_eq!(texts(&tokens), vec!["a\n", "bb\n", "\n", "c"]);
        assert_eq!(tokens[1].span, CharSpan::new(2, 5));
        assert_eq!(tokens[3].index, 3);
    }

    #[test]
    fn test_line_tokenizer_empty() {
        assert!(LineTokenizer.tokenize("").is_empty());
        assert_eq!(texts(&LineTokenizer.tokenize("\n")), vec!["\n"]);
    }

    #[test]
    fn test_word_tokenizer() {
        let tokens = WordTokenizer::new().tokenize("let x  = foo(42);");

        assert_eq!(
            texts(&tokens),
            vec!["let", " ", "x", "  ", "=", " ", "foo", "(", "42", ")", ";"]
        );
        assert_eq!(tokens[3].kind, TokenKind::Whitespace);
        assert_eq!(tokens[8].kind, TokenKind::Number);
    }

    #[test]
    fn test_word_tokenizer_lossless() {
        let input = "  Ünïcode words, tabs\tand ... dots ";
        let tokens = WordTokenizer::new().tokenize(input);

        assert_eq!(texts(&tokens).concat(), input);
        assert!(tokens.iter().all(|t| &input[t.span.start..t.span.end] == t.text));
    }
}
