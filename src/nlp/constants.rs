use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// negation term that is always kept, even when a stop word list contains it
pub(crate) const NEGATION: &str = "not";

/// NLTK's english stop word list
///
/// the contraction-based entries can never match cleaned text (apostrophes are stripped before
/// stop word removal), they're kept so the list matches its source
pub(crate) const STOP_WORDS: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

lazy_static! {
    /// every character that isn't an ascii letter
    pub(crate) static ref NON_ALPHA_REGEX: Regex = Regex::new("[^a-zA-Z]").unwrap();

    /// analyzer token pattern: runs of two or more word characters
    pub(crate) static ref TOKEN_REGEX: Regex = Regex::new(r"\b\w\w+\b").unwrap();

    /// built-in stop word set, negation removed; built once per process
    pub(crate) static ref DEFAULT_STOP_WORDS: HashSet<String> = STOP_WORDS
        .iter()
        .filter(|&&word| word != NEGATION)
        .map(|&word| word.to_owned())
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// negation survives in the default stop word set, everything else is present
    fn default_stop_words_exclude_negation() {
        assert!(!DEFAULT_STOP_WORDS.contains(NEGATION));
        assert!(DEFAULT_STOP_WORDS.contains("is"));
        assert!(DEFAULT_STOP_WORDS.contains("the"));
        assert_eq!(DEFAULT_STOP_WORDS.len(), STOP_WORDS.len() - 1);
    }

    #[test]
    /// analyzer pattern skips single character words
    fn token_regex_requires_two_characters() {
        let found = TOKEN_REGEX
            .find_iter("a great meal, i think")
            .map(|m| m.as_str())
            .collect::<Vec<_>>();

        assert_eq!(found, ["great", "meal", "think"]);
    }
}
