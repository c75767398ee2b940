use super::constants::{NON_ALPHA_REGEX, TOKEN_REGEX};
use crate::traits::Stem;
use std::borrow::Cow;
use std::collections::HashSet;

/// cleaning pipeline wrapper that strips non-alphabetic characters, normalizes word case to
/// lowercase, removes stop words, and stems whatever is left
pub(crate) fn clean(text: &str, stop_words: &HashSet<String>, stemmer: &dyn Stem) -> String {
    let text = remove_non_alphabetic(text);
    let text = normalize_case(text);

    remove_stop_words(&text, stop_words)
        .map(|word| stemmer.stem(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// bag-of-words analyzer: lowercase the text and pull out every run of two or more word
/// characters
pub(crate) fn analyze(text: &str) -> Vec<String> {
    let text = normalize_case(text);

    TOKEN_REGEX
        .find_iter(&text)
        .map(|token| token.as_str().to_owned())
        .collect()
}

/// optimized version of `str::to_lowercase`
fn normalize_case<'a, S: Into<Cow<'a, str>>>(input: S) -> Cow<'a, str> {
    let input = input.into();

    let first = input.find(char::is_uppercase);

    if let Some(first_idx) = first {
        let mut output = String::from(&input[..first_idx]);
        output.reserve(input.len() - first_idx);

        for c in input[first_idx..].chars() {
            if c.is_uppercase() {
                output.extend(c.to_lowercase());
            } else {
                output.push(c)
            }
        }

        Cow::Owned(output)
    } else {
        input
    }
}

/// replace every character outside of [a-zA-Z] with ' ' (space)
fn remove_non_alphabetic(text: &str) -> Cow<'_, str> {
    NON_ALPHA_REGEX.replace_all(text, " ")
}

/// split on whitespace, skipping stop words
fn remove_stop_words<'a>(
    text: &'a str,
    stop_words: &'a HashSet<String>,
) -> impl Iterator<Item = &'a str> {
    text.split_whitespace()
        .filter(move |word| !stop_words.contains(*word))
}
