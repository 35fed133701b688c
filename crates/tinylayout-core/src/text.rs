// crates/tinylayout-core/src/text.rs
//! Whitespace tokenizer shared by min-width sizing and line wrapping.

/// Space, tab, newline, carriage return, vertical tab and form feed.
pub fn is_word_separator(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Split text into words, dropping empty runs between separators.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_word_separator).filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        let words: Vec<&str> = split_words("  hello\tbrave \r\n new\x0Bworld\x0C ").collect();
        assert_eq!(words, vec!["hello", "brave", "new", "world"]);
    }

    #[test]
    fn test_split_words_empty() {
        assert_eq!(split_words("").count(), 0);
        assert_eq!(split_words(" \t\n ").count(), 0);
    }

    #[test]
    fn test_non_breaking_space_is_not_a_separator() {
        let words: Vec<&str> = split_words("a\u{00A0}b c").collect();
        assert_eq!(words, vec!["a\u{00A0}b", "c"]);
    }
}
