use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("static pattern"));

/// Whitespace-delimited fields. Runs of whitespace act as one separator and
/// leading or trailing whitespace produces no empty fields.
pub fn fields(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Number of whitespace-delimited fields in `text`.
pub fn word_count(text: &str) -> usize {
    fields(text).count()
}

/// Replace every maximal run of non-ASCII-alphanumeric characters with a
/// single space.
pub fn normalize(text: &str) -> String {
    NON_ALPHANUMERIC.replace_all(text, " ").into_owned()
}

/// Lowercased alphanumeric words, in input order.
pub fn words(text: &str) -> Vec<String> {
    fields(&normalize(text))
        .map(|w| w.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
    }

    #[test]
    fn word_count_collapses_whitespace() {
        assert_eq!(word_count("a b  c"), 3);
        assert_eq!(word_count("  leading and trailing  "), 3);
        assert_eq!(word_count("tabs\tand\nnewlines"), 3);
    }

    #[test]
    fn word_count_keeps_punctuation_attached() {
        assert_eq!(word_count("hello, world!"), 2);
        assert_eq!(word_count("-- ..."), 2);
    }

    #[test]
    fn normalize_collapses_runs() {
        assert_eq!(normalize("hello,   world!!"), "hello world ");
        assert_eq!(normalize("a--b"), "a b");
        assert_eq!(normalize("abc123"), "abc123");
    }

    #[test]
    fn normalize_treats_non_ascii_as_separator() {
        assert_eq!(normalize("café"), "caf ");
        assert_eq!(normalize("naïve"), "na ve");
    }

    #[test]
    fn words_are_lowercased() {
        assert_eq!(words("The CAT, the dog."), vec!["the", "cat", "the", "dog"]);
    }

    #[test]
    fn words_of_punctuation_only() {
        assert!(words("!!! ... ???").is_empty());
    }

    #[test]
    fn words_split_on_underscores_and_apostrophes() {
        assert_eq!(words("snake_case don't"), vec!["snake", "case", "don", "t"]);
    }
}
