/// Extract lowercase word tokens from text.
///
/// A token is a maximal run of ASCII letters; digits, punctuation and
/// whitespace all act as separators. Tokens come back in left-to-right
/// occurrence order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.chars()
        .fold(vec![String::new()], |mut tokens, c| {
            if c.is_ascii_alphabetic() {
                if let Some(last) = tokens.last_mut() {
                    last.push(c.to_ascii_lowercase());
                }
            } else if tokens.last().map_or(false, |s| !s.is_empty()) {
                tokens.push(String::new());
            }
            tokens
        })
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect()
}

/// Count how often `term` appears as a whole word in a token stream.
pub fn count_term(tokens: &[String], term: &str) -> usize {
    tokens.iter().filter(|t| t.as_str() == term).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("Hello, World! 123");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...!?,  42").is_empty());
    }

    #[test]
    fn test_digits_split_words() {
        assert_eq!(tokenize("word2vec"), vec!["word", "vec"]);
    }

    #[test]
    fn test_non_ascii_acts_as_separator() {
        assert_eq!(tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_count_term() {
        let tokens = tokenize("Deep learning. Deep networks!");
        assert_eq!(count_term(&tokens, "deep"), 2);
        assert_eq!(count_term(&tokens, "networks"), 1);
        assert_eq!(count_term(&tokens, "net"), 0);
    }
}
