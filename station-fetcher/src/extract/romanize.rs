//! Pinyin romanization of Chinese station names.
//!
//! Known words with heteronyms (重庆, 长沙, 厦门, ...) are read as whole
//! words first; any other Han character becomes its default toneless
//! pinyin syllable. Runs of
//! anything else (Latin letters, digits, brackets) are kept verbatim as a
//! single token, and whitespace only separates tokens. Every token is then
//! capitalized and the tokens are joined with single spaces:
//!
//! ```
//! use station_fetcher::extract::romanize;
//!
//! assert_eq!(romanize("北京南站").as_deref(), Some("Bei Jing Nan Zhan"));
//! assert_eq!(romanize("T3航站楼").as_deref(), Some("T3 Hang Zhan Lou"));
//! assert_eq!(romanize("   "), None);
//! ```

use pinyin::ToPinyin;

use super::words::match_word;

/// Romanize `name`, or `None` if it yields no tokens.
pub fn romanize(name: &str) -> Option<String> {
    let tokens = tokenize(name);
    if tokens.is_empty() {
        return None;
    }

    let words: Vec<String> = tokens.iter().map(|t| capitalize(t)).collect();
    Some(words.join(" "))
}

fn tokenize(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut rest = name;

    while let Some(c) = rest.chars().next() {
        if let Some((word, syllables)) = match_word(rest) {
            flush(&mut literal, &mut tokens);
            tokens.extend(syllables.iter().map(|s| s.to_string()));
            rest = &rest[word.len()..];
            continue;
        }

        if let Some(syllable) = c.to_pinyin() {
            flush(&mut literal, &mut tokens);
            tokens.push(syllable.plain().to_string());
        } else if c.is_whitespace() || is_han(c) {
            // Han characters without a known reading are dropped
            flush(&mut literal, &mut tokens);
        } else {
            literal.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }
    flush(&mut literal, &mut tokens);

    tokens
}

fn flush(literal: &mut String, tokens: &mut Vec<String>) {
    if !literal.is_empty() {
        tokens.push(std::mem::take(literal));
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn is_han(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every word of a romanized name starts upper-case and has no inner spaces
        #[test]
        fn words_are_capitalized(name in "[北京上海广州南站东西 a-z0-9]{0,12}") {
            if let Some(romanized) = romanize(&name) {
                prop_assert!(!romanized.starts_with(' '));
                prop_assert!(!romanized.ends_with(' '));
                for word in romanized.split(' ') {
                    prop_assert!(!word.is_empty());
                    let first = word.chars().next().unwrap();
                    prop_assert!(!first.is_lowercase());
                }
            }
        }

        /// One syllable per Han character
        #[test]
        fn one_word_per_han_character(name in "[北京上海广州南站东西]{1,10}") {
            let romanized = romanize(&name).unwrap();
            prop_assert_eq!(romanized.split(' ').count(), name.chars().count());
        }
    }
}
