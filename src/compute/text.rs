//! Word extraction.

use std::collections::BTreeSet;

/// Returns the distinct words of `text`, lower-cased and sorted.
///
/// A word is a maximal run of ASCII letters, digits and underscores; any
/// other character, including non-ASCII letters, separates words.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compute::filter_unique_words;
///
/// let words = filter_unique_words("The quick fox, the lazy DOG and the dog.");
/// assert_eq!(words, vec!["and", "dog", "fox", "lazy", "quick", "the"]);
/// ```
pub fn filter_unique_words(text: &str) -> Vec<String> {
    text.split(|character: char| !is_word_character(character))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn is_word_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}
