use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // \w+ : maximal runs of letters, digits and underscore. Deliberately
    // not a linguistic tokenizer; punctuation and whitespace are plain
    // separators.
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

/// Lower-case the input and split it into word tokens, left to right.
///
/// The dictionary is ASCII lower-case, so plain `to_lowercase` is enough;
/// no full Unicode case folding is attempted.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
